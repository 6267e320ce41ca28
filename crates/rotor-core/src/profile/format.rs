// crates/rotor-core/src/profile/format.rs

use crate::error::Result;
use crate::profile::profile::RotationProfile;
use crate::state::wire::{read_i32, read_u32};

/// Encoded profile size in bytes.
pub const PROFILE_LEN: usize = 20;

/// Layout (little-endian):
/// frame_count:u32 max_speed:i32 accel:i32 accel_stop:i32 subdivision:i32
pub fn encode(p: &RotationProfile) -> [u8; PROFILE_LEN] {
    let mut b = [0u8; PROFILE_LEN];
    b[0..4].copy_from_slice(&(p.frame_count as u32).to_le_bytes());
    b[4..8].copy_from_slice(&p.max_speed.to_le_bytes());
    b[8..12].copy_from_slice(&p.accel.to_le_bytes());
    b[12..16].copy_from_slice(&p.accel_stop.to_le_bytes());
    b[16..20].copy_from_slice(&p.subdivision.to_le_bytes());
    b
}

/// Decode and re-validate a profile starting at `*i`.
pub fn decode(bytes: &[u8], i: &mut usize) -> Result<RotationProfile> {
    let frame_count = read_u32(bytes, i)? as i32;
    let max_speed = read_i32(bytes, i)?;
    let accel = read_i32(bytes, i)?;
    let accel_stop = read_i32(bytes, i)?;
    let subdivision = read_i32(bytes, i)?;
    RotationProfile::with_subdivision(frame_count, max_speed, accel, accel_stop, subdivision)
}

/// Stable identifier: first 16 bytes of blake3 over the encoded profile.
pub fn profile_id_16(p: &RotationProfile) -> [u8; 16] {
    let digest = blake3::hash(&encode(p));
    let mut id = [0u8; 16];
    id.copy_from_slice(&digest.as_bytes()[..16]);
    id
}

pub fn profile_id_hex(p: &RotationProfile) -> String {
    let id = profile_id_16(p);
    let mut s = String::with_capacity(32);
    for b in id {
        s.push_str(&format!("{b:02x}"));
    }
    s
}
