// crates/sbb-core/src/error.rs

use thiserror::Error;

pub type Result<T> = core::result::Result<T, SbbError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SbbError {
    #[error("degenerate quantization range: min={min} must be < max={max}")]
    DegenerateRange { min: i32, max: i32 },

    #[error("index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("storage too short: {required} slots required, {available} available")]
    StorageTooShort { required: usize, available: usize },

    #[error("sample count must be non-zero")]
    ZeroSampleCount,
}
