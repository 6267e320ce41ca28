// crates/rotor-core/src/state/snapshot.rs

use crate::dynamics::controller::RotationController;
use crate::error::{Result, RotorError};
use crate::profile::format as profile_format;
use crate::profile::profile::RotationProfile;
use crate::state::record::RECORD_LEN;
use crate::state::trailer::{self, TRAILER_LEN};
use crate::state::wire::{read_array, read_u16};

const MAGIC: &[u8; 4] = b"ROT1";
pub const VERSION: u16 = 1;

/// Encoded snapshot size in bytes.
pub const SNAPSHOT_LEN: usize = 4 + 2 + profile_format::PROFILE_LEN + RECORD_LEN + TRAILER_LEN;

/// A controller record together with the profile it was saved under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub profile: RotationProfile,
    pub record: [u8; RECORD_LEN],
}

impl Snapshot {
    pub fn capture(profile: &RotationProfile, c: &RotationController) -> Self {
        Self {
            profile: *profile,
            record: c.to_record(),
        }
    }

    /// Rebuild a controller against `p`, which may differ from the saved profile.
    pub fn restore(&self, p: &RotationProfile) -> RotationController {
        let mut c = RotationController::new(p);
        c.load_record(p, &self.record);
        c
    }
}

/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// profile: frame_count:u32 max_speed:i32 accel:i32 accel_stop:i32 subdivision:i32
/// record: position:u32 speed:u32
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(s: &Snapshot) -> Vec<u8> {
    let mut b = Vec::with_capacity(SNAPSHOT_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&profile_format::encode(&s.profile));
    b.extend_from_slice(&s.record);
    trailer::seal(&mut b);
    b
}

pub fn decode(bytes: &[u8]) -> Result<Snapshot> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(RotorError::StateFormat("bad magic".into()));
    }
    if bytes.len() != SNAPSHOT_LEN {
        return Err(RotorError::StateFormat(format!(
            "expected {SNAPSHOT_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    // Integrity first, so a corrupted profile reads as corruption.
    let body = trailer::open(bytes)?;

    let mut i = 4usize;
    let version = read_u16(body, &mut i)?;
    if version != VERSION {
        return Err(RotorError::StateFormat(format!("unsupported version {version}")));
    }

    let profile = profile_format::decode(body, &mut i)?;
    let record: [u8; RECORD_LEN] = read_array(body, &mut i)?;

    Ok(Snapshot { profile, record })
}
