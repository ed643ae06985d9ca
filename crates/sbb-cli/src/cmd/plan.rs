// crates/sbb-cli/src/cmd/plan.rs

use clap::Args;
use sbb_core::config::interval_for_window;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// History window to cover, in minutes (1440 = 24 h)
    #[arg(long)]
    pub window_min: u64,

    /// Number of history slots; each costs one byte of RAM
    #[arg(long, default_value_t = 288)]
    pub samples: usize,
}

/// Print the sampling interval that spreads `samples` over the window.
pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let window_ms = args.window_min.saturating_mul(60_000);
    let interval = interval_for_window(window_ms, args.samples)?;

    println!("window_ms    = {}", window_ms);
    println!("samples      = {}", args.samples);
    println!("ram_bytes    = {}", args.samples);
    println!("interval_ms  = {}", interval);
    Ok(())
}
