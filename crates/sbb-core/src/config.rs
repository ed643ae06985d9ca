// crates/sbb-core/src/config.rs

use crate::error::{Result, SbbError};

pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Sampling configuration. Each slot costs one byte of storage.
///
/// Sizing: a 24 h history at 288 samples needs a 300 000 ms interval
/// (see [`interval_for_window`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    pub interval_ms: u64,
    pub sample_count: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

pub fn validate_config(cfg: &BufferConfig, storage_len: usize) -> Result<()> {
    if cfg.sample_count == 0 {
        return Err(SbbError::ZeroSampleCount);
    }
    if storage_len < cfg.sample_count {
        return Err(SbbError::StorageTooShort {
            required: cfg.sample_count,
            available: storage_len,
        });
    }
    Ok(())
}

/// Interval that spreads `sample_count` samples over `window_ms`.
///
/// The gate fires only after strictly more than the interval has passed, so
/// the real span is slightly longer than `window_ms`.
pub fn interval_for_window(window_ms: u64, sample_count: usize) -> Result<u64> {
    if sample_count == 0 {
        return Err(SbbError::ZeroSampleCount);
    }
    Ok(window_ms / sample_count as u64)
}
