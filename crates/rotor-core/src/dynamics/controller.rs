// crates/rotor-core/src/dynamics/controller.rs

use crate::dynamics::maneuver::Maneuver;
use crate::dynamics::status::RotationStatus;
use crate::fixed::math::wrap_units;
use crate::profile::profile::RotationProfile;

/// Angular state of one rotating body, in sub-frame units.
///
/// The controller does not hold its profile: every call takes the profile
/// explicitly, so the same state can be re-read against an edited profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationController {
    pub(crate) position_units: i32,
    pub(crate) speed_units: i32,
    pub(crate) last_maneuver: Maneuver,
}

impl RotationController {
    /// At rest, facing 0 degrees.
    pub fn new(p: &RotationProfile) -> Self {
        let mut c = Self::default();
        c.init(p, 0.0);
        c
    }

    /// At rest, facing the frame nearest `angle`.
    pub fn facing(p: &RotationProfile, angle: f64) -> Self {
        let mut c = Self::default();
        c.init(p, angle);
        c
    }

    /// Explicit state; position is wrapped and speed clamped to the profile.
    pub fn with_state(p: &RotationProfile, position_units: i32, speed_units: i32) -> Self {
        Self {
            position_units: wrap_units(position_units, p.range_units()),
            speed_units: speed_units.clamp(-p.max_speed(), p.max_speed()),
            last_maneuver: Maneuver::None,
        }
    }

    /// Reset: facing `angle`, zero speed, no maneuver.
    pub fn init(&mut self, p: &RotationProfile, angle: f64) {
        self.set_rotation_angle(p, angle);
        self.speed_units = 0;
        self.last_maneuver = Maneuver::None;
    }

    pub fn position_units(&self) -> i32 {
        self.position_units
    }

    pub fn speed_units(&self) -> i32 {
        self.speed_units
    }

    pub fn last_maneuver(&self) -> Maneuver {
        self.last_maneuver
    }

    /// Advance one tick under `maneuver`.
    pub fn update(&mut self, p: &RotationProfile, maneuver: Maneuver) {
        let (speed, applied) = next_speed(p, self.speed_units, maneuver);

        // A coast that just came to rest settles on the frame center.
        if maneuver == Maneuver::None && self.speed_units != 0 && speed == 0 {
            self.position_units = p.frame_center_units(p.frame_index_from_units(self.position_units));
        }

        self.speed_units = speed;
        self.last_maneuver = applied;
        self.position_units = advance(p, self.position_units, speed);
    }

    /// Zero the speed in place. No snap, no movement.
    pub fn halt(&mut self) {
        self.speed_units = 0;
    }

    pub fn set_rotation_angle(&mut self, p: &RotationProfile, angle: f64) {
        self.position_units = p.frame_center_units(p.frame_index_from_angle(angle));
    }

    /// Not clamped to the profile's max speed.
    pub fn set_rotation_speed_degrees(&mut self, p: &RotationProfile, degrees_per_tick: f64) {
        self.speed_units = p.speed_units_from_degrees(degrees_per_tick);
    }

    pub fn frame_index(&self, p: &RotationProfile) -> i32 {
        p.frame_index_from_units(self.position_units)
    }

    pub fn rotation_angle(&self, p: &RotationProfile) -> f64 {
        p.angle_from_frame_index(self.frame_index(p))
    }

    /// Signed degrees per tick; negative is leftward.
    pub fn rotation_speed_degrees(&self, p: &RotationProfile) -> f64 {
        p.speed_degrees_from_units(self.speed_units)
    }

    /// Sub-unit position where a coast from now on runs out of speed.
    /// Only its frame is meaningful: the stopping tick snaps to the frame
    /// center, this value does not.
    pub fn final_rotation_frame(&self, p: &RotationProfile) -> i32 {
        coast_to_rest(p, self.position_units, self.speed_units)
    }

    pub fn coasting_frame_index(&self, p: &RotationProfile) -> i32 {
        p.frame_index_from_units(self.final_rotation_frame(p))
    }

    pub fn status(&self, p: &RotationProfile) -> RotationStatus {
        RotationStatus {
            frame: self.frame_index(p),
            speed: self.rotation_speed_degrees(p),
            position_units: self.position_units,
            speed_units: self.speed_units,
            last_maneuver: self.last_maneuver,
        }
    }
}

/// Speed after one tick of `maneuver`, and the maneuver that was actually applied.
///
/// Reversing through zero uses `accel_stop`, not `accel`. Coasting from a
/// positive speed reports `RotateLeft` and from a negative speed `RotateRight`.
pub(crate) fn next_speed(p: &RotationProfile, speed: i32, maneuver: Maneuver) -> (i32, Maneuver) {
    let max = p.max_speed();
    match maneuver {
        Maneuver::None => {
            if speed > 0 {
                ((speed.saturating_sub(p.accel_stop())).max(0), Maneuver::RotateLeft)
            } else if speed < 0 {
                ((speed.saturating_add(p.accel_stop())).min(0), Maneuver::RotateRight)
            } else {
                (0, Maneuver::None)
            }
        }
        Maneuver::RotateRight => {
            if speed < max {
                let step = if speed < 0 { p.accel_stop() } else { p.accel() };
                (speed.saturating_add(step).min(max), Maneuver::RotateRight)
            } else {
                (speed, Maneuver::None)
            }
        }
        Maneuver::RotateLeft => {
            if speed > -max {
                let step = if speed > 0 { p.accel_stop() } else { p.accel() };
                (speed.saturating_sub(step).max(-max), Maneuver::RotateLeft)
            } else {
                (speed, Maneuver::None)
            }
        }
    }
}

/// Move `position` by `speed`, wrapped into [0, range).
pub(crate) fn advance(p: &RotationProfile, position: i32, speed: i32) -> i32 {
    let range = p.range_units() as i64;
    (position as i64 + speed as i64).rem_euclid(range) as i32
}

/// Where a coast from `speed` runs out, without the frame-center snap.
///
/// Coasting subtracts `accel_stop` each tick before moving, so after
/// k = ceil(|speed| / accel_stop) ticks the body has travelled
/// (k - 1) * |speed| - accel_stop * k * (k - 1) / 2 units. Stored speeds are
/// not clamped, so this must not loop per tick.
pub(crate) fn coast_to_rest(p: &RotationProfile, position: i32, speed: i32) -> i32 {
    if speed == 0 {
        return position;
    }
    let s = (speed as i128).abs();
    let stop = p.accel_stop() as i128;
    let k = (s + stop - 1) / stop;
    let distance = (k - 1) * s - stop * k * (k - 1) / 2;
    let signed = if speed > 0 { distance } else { -distance };
    (position as i128 + signed).rem_euclid(p.range_units() as i128) as i32
}
