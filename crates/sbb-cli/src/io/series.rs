// crates/sbb-cli/src/io/series.rs

use anyhow::Context;

/// One recorded reading: wall time (ms) and value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub t_ms: u64,
    pub value: f32,
}

/// Parse a series: one reading per line, either `value` or `t_ms,value`.
/// Blank lines and `#` comments are skipped. Lines without a timestamp are
/// placed `poll_ms` apart by their position among the readings.
pub fn parse(text: &str, poll_ms: u64) -> anyhow::Result<Vec<Reading>> {
    let mut out = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let reading = match line.split_once(',') {
            Some((t, v)) => Reading {
                t_ms: t
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("line {}: bad timestamp {t:?}", lineno + 1))?,
                value: parse_value(v, lineno)?,
            },
            None => Reading {
                t_ms: (out.len() as u64).checked_mul(poll_ms).with_context(|| {
                    format!("line {}: timestamp overflows at poll_ms={poll_ms}", lineno + 1)
                })?,
                value: parse_value(line, lineno)?,
            },
        };
        out.push(reading);
    }
    Ok(out)
}

fn parse_value(s: &str, lineno: usize) -> anyhow::Result<f32> {
    s.trim()
        .parse::<f32>()
        .with_context(|| format!("line {}: bad reading {s:?}", lineno + 1))
}

pub fn read_series(path: &str, poll_ms: u64) -> anyhow::Result<Vec<Reading>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read series {path}"))?;
    parse(&text, poll_ms)
}
