//! Lossy byte-per-sample history for a single sensor reading.
//!
//! A [`SampledByteBuffer`] polls a [`Source`], quantizes each reading into one
//! byte with a [`ByteCodec`], and keeps a fixed number of samples in a byte
//! slice owned by the caller. Sampling is paced by an injected [`Clock`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

pub mod buffer;
pub mod clock;
pub mod codec;
pub mod config;
pub mod scheduler;
pub mod source;

pub use crate::buffer::{Extremum, SampledByteBuffer};
pub use crate::clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use crate::clock::MonotonicClock;
pub use crate::codec::ByteCodec;
pub use crate::config::BufferConfig;
pub use crate::error::{Result, SbbError};
pub use crate::source::{FnSource, Source};
