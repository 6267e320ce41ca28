// crates/rotor-core/src/state/record.rs

use std::io::{Read, Write};

use tracing::warn;

use crate::dynamics::controller::RotationController;
use crate::error::Result;
use crate::profile::profile::RotationProfile;

/// Size of the persisted controller state.
pub const RECORD_LEN: usize = 8;

/// Layout (little-endian):
/// position_units:u32
/// speed_units:u32    (two's complement of the signed speed)
///
/// No version field. Loads survive profile edits only through the frame
/// re-validation in `read_from`.
impl RotationController {
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.to_record())?;
        Ok(())
    }

    pub fn to_record(&self) -> [u8; RECORD_LEN] {
        let mut b = [0u8; RECORD_LEN];
        b[0..4].copy_from_slice(&(self.position_units as u32).to_le_bytes());
        b[4..8].copy_from_slice(&(self.speed_units as u32).to_le_bytes());
        b
    }

    /// Replace this controller's state with one read from `r`.
    ///
    /// The stored position is checked against `p`: if it lands on a frame the
    /// profile no longer has, the body is reset to angle 0. Speed is kept.
    pub fn read_from<R: Read>(&mut self, p: &RotationProfile, r: &mut R) -> Result<()> {
        let mut b = [0u8; RECORD_LEN];
        r.read_exact(&mut b)?;
        self.load_record(p, &b);
        Ok(())
    }

    pub fn load_record(&mut self, p: &RotationProfile, b: &[u8; RECORD_LEN]) {
        self.init(p, 0.0);

        let mut word = [0u8; 4];
        word.copy_from_slice(&b[0..4]);
        self.position_units = u32::from_le_bytes(word) as i32;
        word.copy_from_slice(&b[4..8]);
        self.speed_units = u32::from_le_bytes(word) as i32;

        let frame = self.frame_index(p);
        if frame >= p.frame_count() || self.position_units < 0 {
            warn!(
                frame,
                frame_count = p.frame_count(),
                position_units = self.position_units,
                "stored rotation is outside the profile; resetting to angle 0"
            );
            self.set_rotation_angle(p, 0.0);
        }
    }
}
