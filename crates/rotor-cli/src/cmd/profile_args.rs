// crates/rotor-cli/src/cmd/profile_args.rs

use anyhow::Context;
use clap::Args;
use rotor_core::profile::defaults::default_profile;
use rotor_core::profile::format::profile_id_hex;
use rotor_core::{RotationController, RotationProfile};
use tracing::info;

use crate::io::state_file;

/// Profile overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Visual frames per full turn
    #[arg(long)]
    pub frames: Option<i32>,

    /// Max speed (sub-frame units per tick)
    #[arg(long)]
    pub max_speed: Option<i32>,

    /// Acceleration (units per tick)
    #[arg(long)]
    pub accel: Option<i32>,

    /// Stopping deceleration (units per tick)
    #[arg(long)]
    pub accel_stop: Option<i32>,

    /// Sub-frame units per visual frame
    #[arg(long)]
    pub subdivision: Option<i32>,
}

impl ProfileArgs {
    /// Explicit flags win over `base`, field by field.
    pub fn resolve(&self, base: &RotationProfile) -> anyhow::Result<RotationProfile> {
        RotationProfile::with_subdivision(
            self.frames.unwrap_or(base.frame_count()),
            self.max_speed.unwrap_or(base.max_speed()),
            self.accel.unwrap_or(base.accel()),
            self.accel_stop.unwrap_or(base.accel_stop()),
            self.subdivision.unwrap_or(base.subdivision()),
        )
        .context("invalid rotation profile")
    }
}

/// Starting point for sim/face runs.
///
/// Precedence:
/// 1) explicit profile flags
/// 2) else the profile stored in --load-state
/// 3) else the built-in default profile
pub fn start_controller(
    profile_args: &ProfileArgs,
    start_angle: f64,
    load_state: Option<&str>,
) -> anyhow::Result<(RotationProfile, RotationController)> {
    match load_state {
        Some(path) => {
            let snap = state_file::load_rot(path)?;
            let profile = profile_args.resolve(&snap.profile)?;
            let c = snap.restore(&profile);
            log_profile(&profile, "snapshot");
            info!(path, frame = c.frame_index(&profile), speed_units = c.speed_units(), "loaded state");
            Ok((profile, c))
        }
        None => {
            let profile = profile_args.resolve(&default_profile())?;
            log_profile(&profile, "default");
            Ok((profile, RotationController::facing(&profile, start_angle)))
        }
    }
}

pub fn log_profile(p: &RotationProfile, source: &str) {
    info!(
        profile_id = %profile_id_hex(p),
        source,
        frames = p.frame_count(),
        max_speed = p.max_speed(),
        accel = p.accel(),
        accel_stop = p.accel_stop(),
        subdivision = p.subdivision(),
        "profile"
    );
}
