// crates/rotor-cli/src/cmd/mod.rs

pub mod diag;
pub mod face;
pub mod profile_args;
pub mod script;
pub mod sim;
pub mod state;
