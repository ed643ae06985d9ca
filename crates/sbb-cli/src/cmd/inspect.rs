// crates/sbb-cli/src/cmd/inspect.rs

use anyhow::Context;
use clap::Args;
use sbb_core::ByteCodec;

use crate::io::snapshot;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Snapshot path (.sbb)
    #[arg(long)]
    pub r#in: String,

    /// Print raw codes instead of decoded values
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let snap = snapshot::read_snapshot(&args.r#in)?;
    let codec = ByteCodec::new(snap.range_min, snap.range_max).context("snapshot range")?;

    let lo = snap.codes.iter().copied().min().unwrap_or(0);
    let hi = snap.codes.iter().copied().max().unwrap_or(0);

    println!("snapshot     = {}", args.r#in);
    println!("range        = {}..{}", snap.range_min, snap.range_max);
    println!("interval_ms  = {}", snap.interval_ms);
    println!("count        = {}", snap.codes.len());
    println!("max          = {:.3}", codec.decode(hi));
    println!("min          = {:.3}", codec.decode(lo));

    for (i, &code) in snap.codes.iter().enumerate() {
        if args.raw {
            println!("[{i}] {code}");
        } else {
            println!("[{i}] {:.3}", codec.decode(code));
        }
    }

    Ok(())
}
