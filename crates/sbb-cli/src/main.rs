// crates/sbb-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sbb-cli")]
#[command(about = "Sampled byte buffer tools (replay, inspect, plan)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a recorded series through a buffer and print its history
    Replay(cmd::replay::ReplayArgs),

    /// Inspect a .sbb snapshot (crc, range, decoded history)
    Inspect(cmd::inspect::InspectArgs),

    /// Size a buffer: sampling interval for a history window
    Plan(cmd::plan::PlanArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Replay(args) => cmd::replay::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Plan(args) => cmd::plan::run(args),
    }
}
