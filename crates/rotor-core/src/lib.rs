pub mod error;
pub mod validate;

pub mod fixed;
pub mod profile;
pub mod dynamics;
pub mod state;

pub use crate::dynamics::controller::RotationController;
pub use crate::dynamics::maneuver::Maneuver;
pub use crate::dynamics::status::RotationStatus;
pub use crate::error::{Result, RotorError};
pub use crate::profile::profile::RotationProfile;
