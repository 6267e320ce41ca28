// crates/rotor-cli/src/cmd/face.rs

use clap::Args;
use rotor_core::dynamics::autopilot::face;
use tracing::{info, warn};

use crate::cmd::profile_args::{start_controller, ProfileArgs};
use crate::io::{jsonl, state_file};

#[derive(Args, Debug)]
pub struct FaceArgs {
    /// Heading to face, in degrees (any range)
    #[arg(long, allow_hyphen_values = true)]
    pub target: f64,

    /// Starting heading in degrees (ignored with --load-state)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_angle: f64,

    /// Tick budget
    #[arg(long, default_value_t = 1_000)]
    pub max_ticks: u64,

    /// Exit non-zero if the body has not settled within --max-ticks
    #[arg(long)]
    pub require_settle: bool,

    /// Continue from a saved snapshot (.rot)
    #[arg(long)]
    pub load_state: Option<String>,

    /// Save the final state to this .rot path
    #[arg(long)]
    pub save_state: Option<String>,

    /// Output path for JSONL statuses (default: stdout)
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run(args: FaceArgs) -> anyhow::Result<()> {
    if !args.target.is_finite() {
        anyhow::bail!("--target must be a finite angle (got {})", args.target);
    }

    let (profile, mut c) =
        start_controller(&args.profile, args.start_angle, args.load_state.as_deref())?;

    let run = face(&profile, &mut c, args.target, args.max_ticks);
    jsonl::write_statuses_to(args.out.as_deref(), &run.statuses)?;

    if let Some(path) = args.save_state.as_deref() {
        state_file::save_rot(path, &profile, &c)?;
        info!(path, "saved state");
    }

    match run.settled {
        Some(ticks) => {
            info!(
                ticks,
                target = args.target,
                frame = run.desired_frame,
                angle = c.rotation_angle(&profile),
                "face ok"
            );
        }
        None => {
            warn!(
                max_ticks = args.max_ticks,
                target = args.target,
                desired_frame = run.desired_frame,
                frame = c.frame_index(&profile),
                speed_units = c.speed_units(),
                "did not settle"
            );
            if args.require_settle {
                anyhow::bail!(
                    "did not settle on frame {} within {} ticks",
                    run.desired_frame,
                    args.max_ticks
                );
            }
        }
    }

    Ok(())
}
