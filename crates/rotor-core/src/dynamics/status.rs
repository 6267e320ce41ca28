use serde::Serialize;

use crate::dynamics::maneuver::Maneuver;

/// Snapshot of a controller for consumers and logs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RotationStatus {
    /// Visual frame index.
    pub frame: i32,
    /// Degrees per tick, signed.
    pub speed: f64,
    #[serde(rename = "currentFrameVar")]
    pub position_units: i32,
    #[serde(rename = "currentSpeedVar")]
    pub speed_units: i32,
    #[serde(rename = "lastManeuver")]
    pub last_maneuver: Maneuver,
}
