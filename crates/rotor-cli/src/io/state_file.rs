// crates/rotor-cli/src/io/state_file.rs

use anyhow::{Context, Result};
use rotor_core::state::snapshot::{self, Snapshot};
use rotor_core::{RotationController, RotationProfile};

/// Load and verify a .rot snapshot.
pub fn load_rot(path: &str) -> Result<Snapshot> {
    let bytes = std::fs::read(path).with_context(|| format!("read snapshot {path}"))?;
    let snap = snapshot::decode(&bytes).with_context(|| format!("decode snapshot {path}"))?;
    Ok(snap)
}

/// Save a controller with the profile it runs under.
pub fn save_rot(path: &str, profile: &RotationProfile, c: &RotationController) -> Result<()> {
    let bytes = snapshot::encode(&Snapshot::capture(profile, c));
    std::fs::write(path, bytes).with_context(|| format!("write snapshot {path}"))?;
    Ok(())
}
