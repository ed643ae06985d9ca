// crates/sbb-core/src/codec.rs

use crate::error::{Result, SbbError};

/// Linear 8-bit quantizer over a fixed integer range.
///
/// - `decode(0) == range_min`
/// - `decode(255) == range_max`
/// - `encode` truncates toward zero and keeps the low 8 bits. Readings outside
///   `range_min..=range_max` wrap around the byte instead of saturating, so a
///   reading slightly above `range_max` lands near code 0.
///
/// A round trip `decode(encode(x))` is off by at most one step (see [`ByteCodec::step`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteCodec {
    range_min: i32,
    range_max: i32,
}

impl ByteCodec {
    pub const CODES: f32 = 255.0;

    pub fn new(range_min: i32, range_max: i32) -> Result<Self> {
        if range_max <= range_min {
            return Err(SbbError::DegenerateRange {
                min: range_min,
                max: range_max,
            });
        }
        Ok(Self { range_min, range_max })
    }

    #[inline]
    pub fn range_min(&self) -> i32 {
        self.range_min
    }

    #[inline]
    pub fn range_max(&self) -> i32 {
        self.range_max
    }

    #[inline]
    fn span(&self) -> f32 {
        self.range_max as f32 - self.range_min as f32
    }

    /// Value width of one code.
    #[inline]
    pub fn step(&self) -> f32 {
        self.span() / Self::CODES
    }

    pub fn encode(&self, value: f32) -> u8 {
        let scaled = (value - self.range_min as f32) * Self::CODES / self.span();
        // f32 -> i64 truncates (NaN -> 0); i64 -> u8 keeps the low byte.
        (scaled as i64) as u8
    }

    pub fn decode(&self, code: u8) -> f32 {
        code as f32 * self.span() / Self::CODES + self.range_min as f32
    }
}
