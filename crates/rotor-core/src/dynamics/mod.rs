pub mod autopilot;
pub mod controller;
pub mod diagnostics;
pub mod lookahead;
pub mod maneuver;
pub mod status;
