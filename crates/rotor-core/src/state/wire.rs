// crates/rotor-core/src/state/wire.rs

use crate::error::{Result, RotorError};

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    let end = i
        .checked_add(N)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| RotorError::StateFormat("unexpected eof".into()))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..end]);
    *i = end;
    Ok(out)
}

pub fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(take(bytes, i)?))
}

pub fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(bytes, i)?))
}

pub fn read_i32(bytes: &[u8], i: &mut usize) -> Result<i32> {
    Ok(i32::from_le_bytes(take(bytes, i)?))
}

pub fn read_array<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    take(bytes, i)
}
