// crates/sbb-cli/src/cmd/replay.rs

use std::cell::Cell;

use clap::{Args, ValueEnum};
use sbb_core::{BufferConfig, ByteCodec, ManualClock, SampledByteBuffer};

use crate::io::profile::{self, BufferProfile};
use crate::io::series;
use crate::io::snapshot::{self, Snapshot};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum HistoryFmt {
    /// `offset code value` per line
    Text,
    /// JSON lines: {"offset":N,"code":N,"value":F}
    Jsonl,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Series file: one reading per line, `value` or `t_ms,value` (`#` comments allowed)
    #[arg(long)]
    pub r#in: String,

    /// TOML profile with a [buffer] table. Flags below override its values.
    #[arg(long)]
    pub config: Option<String>,

    /// Lower end of the quantization range
    #[arg(long, allow_negative_numbers = true)]
    pub range_min: Option<i32>,

    /// Upper end of the quantization range
    #[arg(long, allow_negative_numbers = true)]
    pub range_max: Option<i32>,

    /// Minimum time between recorded samples (ms)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Number of history slots (one byte each)
    #[arg(long)]
    pub sample_count: Option<usize>,

    /// Spacing (ms) assigned to readings that carry no timestamp
    #[arg(long, default_value_t = 1000)]
    pub poll_ms: u64,

    /// Write the final history as a .sbb snapshot
    #[arg(long)]
    pub out: Option<String>,

    /// History output format (stdout)
    #[arg(long, value_enum, default_value_t = HistoryFmt::Text)]
    pub fmt: HistoryFmt,
}

impl ReplayArgs {
    fn effective_profile(&self) -> anyhow::Result<BufferProfile> {
        let mut p = match &self.config {
            Some(path) => profile::load(path)?.buffer,
            None => BufferProfile::default(),
        };
        if let Some(v) = self.range_min {
            p.range_min = v;
        }
        if let Some(v) = self.range_max {
            p.range_max = v;
        }
        if let Some(v) = self.interval_ms {
            p.interval_ms = v;
        }
        if let Some(v) = self.sample_count {
            p.sample_count = v;
        }
        Ok(p)
    }
}

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
    let p = args.effective_profile()?;
    let readings = series::read_series(&args.r#in, args.poll_ms)?;
    let Some(first) = readings.first() else {
        anyhow::bail!("series {} holds no readings", args.r#in);
    };

    let codec = ByteCodec::new(p.range_min, p.range_max)?;
    let cfg = BufferConfig {
        interval_ms: p.interval_ms,
        sample_count: p.sample_count,
    };
    tracing::debug!(?cfg, range_min = p.range_min, range_max = p.range_max, "replay profile");

    let mut storage = vec![0u8; p.sample_count];
    let reading = Cell::new(first.value);
    let clock = ManualClock::new(first.t_ms);
    let mut buf = SampledByteBuffer::with_config(&reading, codec, &mut storage, &clock, cfg)?;

    let mut committed = 0u64;
    for r in &readings {
        clock.set(r.t_ms);
        reading.set(r.value);

        let was_initialized = buf.is_initialized();
        let before = buf.last_sample_ms();
        buf.update();
        if was_initialized && buf.last_sample_ms() != before {
            committed += 1;
        }
    }

    let max = buf.max();
    let min = buf.min();

    eprintln!("--- replay ---");
    eprintln!("series          = {}", args.r#in);
    eprintln!("readings        = {}", readings.len());
    eprintln!("range           = {}..{}", p.range_min, p.range_max);
    eprintln!("step            = {:.4}", codec.step());
    eprintln!("interval_ms     = {}", p.interval_ms);
    eprintln!("sample_count    = {}", p.sample_count);
    eprintln!("committed       = {}", committed);
    eprintln!("max             = {:.3}", max);
    eprintln!("min             = {:.3}", min);

    for (i, &code) in buf.samples().iter().enumerate() {
        let value = codec.decode(code);
        match args.fmt {
            HistoryFmt::Text => println!("{:>4} {:>3} {:.3}", i, code, value),
            HistoryFmt::Jsonl => println!(
                "{{\"offset\":{},\"code\":{},\"value\":{:.3}}}",
                i, code, value
            ),
        }
    }

    if let Some(path) = &args.out {
        let snap = Snapshot {
            range_min: p.range_min,
            range_max: p.range_max,
            interval_ms: p.interval_ms,
            codes: buf.samples().to_vec(),
        };
        snapshot::write_snapshot(path, &snap)?;
        eprintln!("wrote snapshot: {} ({} samples)", path, snap.codes.len());
    }

    Ok(())
}
