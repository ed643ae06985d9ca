// crates/sbb-core/src/buffer.rs

use crate::clock::Clock;
use crate::codec::ByteCodec;
use crate::config::{validate_config, BufferConfig};
use crate::error::{Result, SbbError};
use crate::scheduler::Scheduler;
use crate::source::Source;

/// Which end of the recorded range to look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// Quantized sample history for one scalar reading, stored in caller-owned bytes.
///
/// `storage[0]` is always the newest sample; older samples move toward the
/// tail on each scheduled commit and the oldest falls off. Only the first
/// `sample_count` bytes of `storage` are used.
///
/// The buffer borrows `storage` for `'a` and reads the monitored value
/// through `source` on every [`update`](Self::update). Neither is owned; to
/// keep the raw history visible to other code, read it back through
/// [`samples`](Self::samples) or release it with
/// [`into_storage`](Self::into_storage).
pub struct SampledByteBuffer<'a, S, C> {
    source: S,
    clock: C,
    codec: ByteCodec,
    storage: &'a mut [u8],
    sample_count: usize,
    scheduler: Scheduler,
    cached_min: u8,
    cached_max: u8,
    initialized: bool,
}

impl<'a, S: Source, C: Clock> SampledByteBuffer<'a, S, C> {
    /// Default configuration: 100 samples, 1000 ms apart. `storage` must hold
    /// at least 100 bytes; use [`with_config`](Self::with_config) for smaller
    /// buffers.
    pub fn new(
        source: S,
        range_min: i32,
        range_max: i32,
        storage: &'a mut [u8],
        clock: C,
    ) -> Result<Self> {
        let codec = ByteCodec::new(range_min, range_max)?;
        Self::with_config(source, codec, storage, clock, BufferConfig::default())
    }

    /// Build over `storage` with an explicit codec and configuration.
    ///
    /// The slots in use are filled with the current reading right away, so
    /// the history never exposes bytes left over in `storage`.
    pub fn with_config(
        source: S,
        codec: ByteCodec,
        storage: &'a mut [u8],
        clock: C,
        cfg: BufferConfig,
    ) -> Result<Self> {
        validate_config(&cfg, storage.len())?;
        let code = codec.encode(source.read());
        storage[..cfg.sample_count].fill(code);
        Ok(Self {
            source,
            clock,
            codec,
            storage,
            sample_count: cfg.sample_count,
            scheduler: Scheduler::new(cfg.interval_ms),
            cached_min: code,
            cached_max: code,
            initialized: false,
        })
    }

    /// Change the sampling interval and the number of slots in use.
    ///
    /// Meant for setup. If the history grows, the new tail slots are filled
    /// with the oldest recorded sample so every slot in use still holds a
    /// real reading.
    pub fn set_interval_samples(&mut self, interval_ms: u64, sample_count: usize) -> Result<()> {
        let cfg = BufferConfig {
            interval_ms,
            sample_count,
        };
        validate_config(&cfg, self.storage.len())?;

        if sample_count > self.sample_count {
            let oldest = self.window()[self.sample_count - 1];
            for slot in &mut self.storage[self.sample_count..sample_count] {
                *slot = oldest;
            }
        }

        self.scheduler.set_interval(interval_ms);
        self.sample_count = sample_count;
        tracing::debug!(interval_ms, sample_count, "buffer reconfigured");
        Ok(())
    }

    /// One polling step. Call as often as the host loop allows.
    ///
    /// The first call fills every slot with the current reading. Later calls
    /// commit a new sample when the interval has elapsed, and otherwise let an
    /// out-of-range reading replace slot 0 (see [`maybe_adopt_spike`](Self::maybe_adopt_spike)).
    pub fn update(&mut self) {
        let code = self.codec.encode(self.source.read());
        let now = self.clock.now_millis();

        if !self.initialized {
            self.bootstrap(code, now);
            return;
        }

        if self.scheduler.should_sample(now) {
            self.shift();
            self.commit(code);
            self.refresh_extremes();
            tracing::trace!(code, now, "sample committed");
        } else {
            self.maybe_adopt_spike(code);
        }
    }

    fn bootstrap(&mut self, code: u8, now: u64) {
        self.window_mut().fill(code);
        self.cached_min = code;
        self.cached_max = code;
        self.initialized = true;
        // The fill counts as the first recorded sample.
        self.scheduler = Scheduler::armed(self.scheduler.interval(), now);
        tracing::debug!(code, slots = self.sample_count, "history bootstrapped");
    }

    /// Compare an off-schedule reading against the cached extremes.
    ///
    /// The cache is rescanned from the history first. A code above the
    /// maximum or below the minimum is adopted into the cache and written
    /// into slot 0, so a spike shows up before the next scheduled commit.
    /// Returns the extremum that moved, if any.
    pub fn maybe_adopt_spike(&mut self, code: u8) -> Option<Extremum> {
        if !self.initialized {
            return None;
        }

        let mut adopted = None;

        self.cached_max = self.extremum(Extremum::Max);
        if code > self.cached_max {
            self.cached_max = code;
            self.window_mut()[0] = code;
            adopted = Some(Extremum::Max);
        }

        self.cached_min = self.extremum(Extremum::Min);
        if code < self.cached_min {
            self.cached_min = code;
            self.window_mut()[0] = code;
            adopted = Some(Extremum::Min);
        }

        if let Some(kind) = adopted {
            tracing::debug!(code, ?kind, "spike adopted into slot 0");
        }
        adopted
    }

    /// Move every sample one slot toward the tail; the oldest is dropped.
    pub(crate) fn shift(&mut self) {
        let n = self.sample_count;
        self.window_mut().copy_within(..n - 1, 1);
    }

    pub(crate) fn commit(&mut self, code: u8) {
        self.window_mut()[0] = code;
    }

    fn refresh_extremes(&mut self) {
        self.cached_max = self.extremum(Extremum::Max);
        self.cached_min = self.extremum(Extremum::Min);
    }

    /// Full scan of the history, starting from the newest sample.
    pub fn extremum(&self, kind: Extremum) -> u8 {
        let window = self.window();
        debug_assert!(!window.is_empty());
        let (first, rest) = (window[0], &window[1..]);
        match kind {
            Extremum::Min => rest.iter().fold(first, |acc, &b| acc.min(b)),
            Extremum::Max => rest.iter().fold(first, |acc, &b| acc.max(b)),
        }
    }

    /// Largest recorded value, decoded. Rescans the history and refreshes
    /// the cache; before the first `update` this is the reading seen at
    /// construction.
    pub fn max(&mut self) -> f32 {
        if self.initialized {
            self.cached_max = self.extremum(Extremum::Max);
        }
        self.codec.decode(self.cached_max)
    }

    /// Smallest recorded value, decoded. See [`max`](Self::max).
    pub fn min(&mut self) -> f32 {
        if self.initialized {
            self.cached_min = self.extremum(Extremum::Min);
        }
        self.codec.decode(self.cached_min)
    }

    /// Decoded value `offset` samples back; `0` is the newest.
    pub fn past_value(&self, offset: usize) -> Result<f32> {
        self.window()
            .get(offset)
            .map(|&code| self.codec.decode(code))
            .ok_or(SbbError::IndexOutOfRange {
                index: offset,
                len: self.sample_count,
            })
    }

    /// Decoded history, newest first.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.window().iter().map(move |&code| self.codec.decode(code))
    }
}

impl<'a, S, C> SampledByteBuffer<'a, S, C> {
    #[inline]
    fn window(&self) -> &[u8] {
        &self.storage[..self.sample_count]
    }

    #[inline]
    fn window_mut(&mut self) -> &mut [u8] {
        &mut self.storage[..self.sample_count]
    }

    /// Raw quantized history in use, newest first.
    pub fn samples(&self) -> &[u8] {
        self.window()
    }

    pub fn latest_code(&self) -> u8 {
        self.window()[0]
    }

    pub fn codec(&self) -> &ByteCodec {
        &self.codec
    }

    pub fn config(&self) -> BufferConfig {
        BufferConfig {
            interval_ms: self.scheduler.interval(),
            sample_count: self.sample_count,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// `(min, max)` codes as last computed by `update` or the accessors.
    pub fn cached_extremes(&self) -> (u8, u8) {
        (self.cached_min, self.cached_max)
    }

    /// Timestamp of the last scheduled commit (or of the bootstrap fill).
    pub fn last_sample_ms(&self) -> u64 {
        self.scheduler.last_sample()
    }

    /// End the borrow and hand the storage back.
    pub fn into_storage(self) -> &'a mut [u8] {
        self.storage
    }
}
