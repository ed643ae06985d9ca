// crates/sbb-cli/src/io/profile.rs

use std::path::Path;

use anyhow::Context;
use sbb_core::config::{DEFAULT_INTERVAL_MS, DEFAULT_SAMPLE_COUNT};
use serde::Deserialize;

/// TOML profile for a monitored reading.
///
/// ```toml
/// [buffer]
/// range_min = -40
/// range_max = 85
/// interval_ms = 300000
/// sample_count = 288
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub buffer: BufferProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BufferProfile {
    pub range_min: i32,
    pub range_max: i32,
    pub interval_ms: u64,
    pub sample_count: usize,
}

impl Default for BufferProfile {
    fn default() -> Self {
        Self {
            range_min: 0,
            range_max: 100,
            interval_ms: DEFAULT_INTERVAL_MS,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Load a profile. A missing file yields the defaults.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Profile> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("profile not found at '{}'; using defaults", path.display());
        return Ok(Profile::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read profile {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse profile {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<Profile> {
    Ok(toml::from_str(raw)?)
}
