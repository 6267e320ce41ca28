// crates/rotor-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "rotor")]
#[command(about = "Integral rotation controller CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a maneuver script and print per-tick status (JSONL)
    Sim(cmd::sim::SimArgs),

    /// Turn toward a heading using the look-ahead autopilot
    Face(cmd::face::FaceArgs),

    /// Run the turn/halt/return symmetry diagnostics
    Diag(cmd::diag::DiagArgs),

    /// Snapshot tools (.rot)
    State(cmd::state::StateArgs),
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries data; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Face(args) => cmd::face::run(args),
        Commands::Diag(args) => cmd::diag::run(args),
        Commands::State(args) => cmd::state::run(args),
    }
}
