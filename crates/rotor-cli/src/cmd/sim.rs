// crates/rotor-cli/src/cmd/sim.rs

use clap::Args;
use rotor_core::dynamics::autopilot::run_script;
use rotor_core::{Maneuver, RotationStatus};
use tracing::info;

use crate::cmd::profile_args::{start_controller, ProfileArgs};
use crate::cmd::script::{self, Step};
use crate::io::{jsonl, state_file};

#[derive(Args, Debug)]
pub struct SimArgs {
    /// Maneuver script: R right, L left, - coast, . halt, counts repeat (e.g. "10R.10L")
    #[arg(long)]
    pub script: String,

    /// Starting heading in degrees (ignored with --load-state)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_angle: f64,

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

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let steps = script::parse(&args.script)?;
    let (profile, mut c) =
        start_controller(&args.profile, args.start_angle, args.load_state.as_deref())?;

    let mut statuses: Vec<RotationStatus> = Vec::with_capacity(steps.len());
    let mut pending: Vec<Maneuver> = Vec::new();
    let mut ticks = 0usize;

    for step in steps {
        match step {
            Step::Tick(m) => pending.push(m),
            Step::Halt => {
                ticks += pending.len();
                statuses.extend(run_script(&profile, &mut c, &pending));
                pending.clear();
                c.halt();
                statuses.push(c.status(&profile));
            }
        }
    }
    ticks += pending.len();
    statuses.extend(run_script(&profile, &mut c, &pending));

    jsonl::write_statuses_to(args.out.as_deref(), &statuses)?;

    if let Some(path) = args.save_state.as_deref() {
        state_file::save_rot(path, &profile, &c)?;
        info!(path, "saved state");
    }

    info!(
        ticks,
        frame = c.frame_index(&profile),
        angle = c.rotation_angle(&profile),
        speed = c.rotation_speed_degrees(&profile),
        "sim ok"
    );
    Ok(())
}
