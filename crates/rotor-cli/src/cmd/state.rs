// crates/rotor-cli/src/cmd/state.rs

use clap::{Args, Subcommand};
use rotor_core::profile::format::profile_id_hex;
use rotor_core::RotationController;

use crate::cmd::profile_args::ProfileArgs;
use crate::io::state_file;

#[derive(Args)]
pub struct StateArgs {
    #[command(subcommand)]
    pub cmd: StateCmd,
}

#[derive(Subcommand)]
pub enum StateCmd {
    /// Print a snapshot and how it restores against a (possibly edited) profile
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Snapshot path (.rot)
    #[arg(long)]
    pub state: String,

    /// Overrides applied on top of the stored profile before restoring
    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run(args: StateArgs) -> anyhow::Result<()> {
    match args.cmd {
        StateCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let snap = state_file::load_rot(&a.state)?;
    let saved = snap.profile;

    // Stored state as written, against the profile it was saved with.
    let mut raw = RotationController::new(&saved);
    raw.load_record(&saved, &snap.record);

    println!("state_path        = {}", a.state);
    println!("profile_id        = {}", profile_id_hex(&saved));
    println!("frames            = {}", saved.frame_count());
    println!("max_speed         = {}", saved.max_speed());
    println!("accel             = {}", saved.accel());
    println!("accel_stop        = {}", saved.accel_stop());
    println!("subdivision       = {}", saved.subdivision());
    println!("position_units    = {}", raw.position_units());
    println!("speed_units       = {}", raw.speed_units());
    println!("frame             = {}", raw.frame_index(&saved));
    println!("angle             = {}", raw.rotation_angle(&saved));
    println!("speed_deg_per_tick = {}", raw.rotation_speed_degrees(&saved));

    let target = a.profile.resolve(&saved)?;
    if target != saved {
        let restored = snap.restore(&target);
        println!();
        println!("--- restored against overridden profile ---");
        println!("profile_id        = {}", profile_id_hex(&target));
        println!("frames            = {}", target.frame_count());
        println!("position_units    = {}", restored.position_units());
        println!("speed_units       = {}", restored.speed_units());
        println!("frame             = {}", restored.frame_index(&target));
        if restored.position_units() != raw.position_units() {
            println!(
                "NOTE: stored frame {} does not exist in a {}-frame profile; position reset to angle 0",
                raw.frame_index(&saved),
                target.frame_count()
            );
        }
    }

    Ok(())
}
