// crates/rotor-core/src/state/trailer.rs

use crate::error::{Result, RotorError};

/// crc32:u32 followed by the first 16 bytes of blake3.
pub const TRAILER_LEN: usize = 4 + 16;

/// Append the integrity trailer: crc32 over `buf`, then blake3 over `buf`
/// plus the crc.
pub fn seal(buf: &mut Vec<u8>) {
    let crc = crc32fast::hash(buf);
    buf.extend_from_slice(&crc.to_le_bytes());
    let digest = blake3::hash(buf);
    buf.extend_from_slice(&digest.as_bytes()[..16]);
}

/// Check the trailer and return the sealed body.
///
/// crc32 is checked first, so plain corruption reports as a crc mismatch.
pub fn open(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() < TRAILER_LEN {
        return Err(RotorError::StateFormat("missing integrity trailer".into()));
    }
    let body_len = bytes.len() - TRAILER_LEN;
    let (body, trailer) = bytes.split_at(body_len);

    let mut crc = [0u8; 4];
    crc.copy_from_slice(&trailer[..4]);
    if u32::from_le_bytes(crc) != crc32fast::hash(body) {
        return Err(RotorError::StateFormat("crc32 mismatch".into()));
    }

    let digest = blake3::hash(&bytes[..body_len + 4]);
    if trailer[4..] != digest.as_bytes()[..16] {
        return Err(RotorError::StateFormat("blake3 mismatch".into()));
    }

    Ok(body)
}
