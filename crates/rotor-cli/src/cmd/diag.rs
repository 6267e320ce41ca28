// crates/rotor-cli/src/cmd/diag.rs

use clap::Args;
use rotor_core::dynamics::diagnostics::run_profile_diagnostics;
use rotor_core::profile::defaults::default_profile;
use tracing::{error, info};

use crate::cmd::profile_args::{log_profile, ProfileArgs};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct DiagArgs {
    /// Output path for JSONL statuses (default: stdout)
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run(args: DiagArgs) -> anyhow::Result<()> {
    let profile = args.profile.resolve(&default_profile())?;
    log_profile(&profile, "diag");

    let report = run_profile_diagnostics(&profile)?;
    jsonl::write_statuses_to(args.out.as_deref(), &report.statuses)?;

    for f in report.failures.iter() {
        error!(failure = %f, "diagnostic failure");
    }
    if !report.passed() {
        anyhow::bail!("{} diagnostic failure(s)", report.failures.len());
    }

    info!(statuses = report.statuses.len(), "diag ok");
    Ok(())
}
