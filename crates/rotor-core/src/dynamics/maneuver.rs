// crates/rotor-core/src/dynamics/maneuver.rs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RotorError;

/// Per-tick rotation command. Right is the positive speed direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Maneuver {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "left")]
    RotateLeft,
    #[serde(rename = "right")]
    RotateRight,
}

impl Maneuver {
    /// Status tag: "none", "left" or "right".
    pub fn tag(self) -> &'static str {
        match self {
            Maneuver::None => "none",
            Maneuver::RotateLeft => "left",
            Maneuver::RotateRight => "right",
        }
    }

    /// Maneuver that turns toward the sign of `diff` (positive = right).
    pub fn toward(diff: i32) -> Maneuver {
        match diff {
            d if d > 0 => Maneuver::RotateRight,
            d if d < 0 => Maneuver::RotateLeft,
            _ => Maneuver::None,
        }
    }

    pub fn mirrored(self) -> Maneuver {
        match self {
            Maneuver::None => Maneuver::None,
            Maneuver::RotateLeft => Maneuver::RotateRight,
            Maneuver::RotateRight => Maneuver::RotateLeft,
        }
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Maneuver {
    type Err = RotorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "n" | "-" => Ok(Maneuver::None),
            "left" | "l" => Ok(Maneuver::RotateLeft),
            "right" | "r" => Ok(Maneuver::RotateRight),
            other => Err(RotorError::Validation(format!("unknown maneuver '{other}'"))),
        }
    }
}
