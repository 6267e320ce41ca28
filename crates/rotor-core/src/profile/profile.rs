// crates/rotor-core/src/profile/profile.rs

use crate::error::{Result, RotorError};
use crate::validate::validate_profile;

/// Fixed-point sub-positions per visual frame unless a profile says otherwise.
pub const DEFAULT_SUBDIVISION: i32 = 4;

/// Rotational capability of a body class.
///
/// All rates are in sub-frame units (`subdivision` units per visual frame).
/// A profile is validated on construction and never mutated afterwards, so one
/// instance can back any number of controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationProfile {
    pub(crate) frame_count: i32,
    pub(crate) max_speed: i32,
    pub(crate) accel: i32,
    pub(crate) accel_stop: i32,
    pub(crate) subdivision: i32,
}

impl RotationProfile {
    pub fn new(frame_count: i32, max_speed: i32, accel: i32, accel_stop: i32) -> Result<Self> {
        Self::with_subdivision(frame_count, max_speed, accel, accel_stop, DEFAULT_SUBDIVISION)
    }

    pub fn with_subdivision(
        frame_count: i32,
        max_speed: i32,
        accel: i32,
        accel_stop: i32,
        subdivision: i32,
    ) -> Result<Self> {
        let p = Self {
            frame_count,
            max_speed,
            accel,
            accel_stop,
            subdivision,
        };
        validate_profile(&p)?;
        Ok(p)
    }

    /// Build a profile from per-tick rates in degrees.
    /// Acceleration rates never round down to zero.
    pub fn from_degrees(
        frame_count: i32,
        max_degrees_per_tick: f64,
        accel_degrees: f64,
        accel_stop_degrees: f64,
    ) -> Result<Self> {
        for (name, v) in [
            ("max speed", max_degrees_per_tick),
            ("accel", accel_degrees),
            ("accel_stop", accel_stop_degrees),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RotorError::Validation(format!(
                    "{name} must be a finite, non-negative number of degrees (got {v})"
                )));
            }
        }

        // Scale-only profile: just enough to convert degrees for this frame count.
        let scale = Self::with_subdivision(frame_count, 0, 1, 1, DEFAULT_SUBDIVISION)?;

        Self::new(
            frame_count,
            scale.speed_units_from_degrees(max_degrees_per_tick),
            scale.speed_units_from_degrees(accel_degrees).max(1),
            scale.speed_units_from_degrees(accel_stop_degrees).max(1),
        )
    }

    pub fn frame_count(&self) -> i32 {
        self.frame_count
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    pub fn accel(&self) -> i32 {
        self.accel
    }

    pub fn accel_stop(&self) -> i32 {
        self.accel_stop
    }

    pub fn subdivision(&self) -> i32 {
        self.subdivision
    }

    /// Full turn in sub-frame units.
    #[inline]
    pub fn range_units(&self) -> i32 {
        self.frame_count * self.subdivision
    }

    /// Whole visual frames crossed by one tick at full speed.
    #[inline]
    pub fn max_frame_step_per_tick(&self) -> i32 {
        self.max_speed / self.subdivision
    }

    /// Nearest frame to `angle` (degrees, any range). Halfway rounds up.
    pub fn frame_index_from_angle(&self, angle: f64) -> i32 {
        let n = self.frame_count as f64;
        let a = angle.rem_euclid(360.0);
        let idx = (a * n / 360.0 + 0.5).floor() as i64;
        idx.rem_euclid(self.frame_count as i64) as i32
    }

    /// Angle of a frame, in [0, 360).
    pub fn angle_from_frame_index(&self, frame_index: i32) -> f64 {
        let idx = frame_index.rem_euclid(self.frame_count);
        idx as f64 * 360.0 / self.frame_count as f64
    }

    #[inline]
    pub fn frame_index_from_units(&self, units: i32) -> i32 {
        units.div_euclid(self.subdivision)
    }

    /// Resting position for a frame: the middle sub-unit.
    #[inline]
    pub fn frame_center_units(&self, frame_index: i32) -> i32 {
        frame_index * self.subdivision + self.subdivision / 2
    }

    pub fn speed_units_from_degrees(&self, degrees_per_tick: f64) -> i32 {
        (degrees_per_tick * self.range_units() as f64 / 360.0).round() as i32
    }

    pub fn speed_degrees_from_units(&self, units: i32) -> f64 {
        360.0 * units as f64 / self.range_units() as f64
    }
}
