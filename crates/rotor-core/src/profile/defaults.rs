// crates/rotor-core/src/profile/defaults.rs

use crate::profile::profile::{RotationProfile, DEFAULT_SUBDIVISION};

/// Reference profile: 16 frames, half a frame of acceleration per tick,
/// stopping twice as hard as starting, two frames per tick at full speed.
pub fn default_profile() -> RotationProfile {
    RotationProfile {
        frame_count: 16,
        max_speed: 8,
        accel: 2,
        accel_stop: 4,
        subdivision: DEFAULT_SUBDIVISION,
    }
}
