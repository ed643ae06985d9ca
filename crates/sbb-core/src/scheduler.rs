// crates/sbb-core/src/scheduler.rs

/// Non-blocking fixed-interval gate.
///
/// A sample is due once strictly more than `interval_ms` has passed since the
/// last one. Missed intervals are not queued: after a long stall exactly one
/// sample is due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    interval_ms: u64,
    last_sample_ms: u64,
}

impl Scheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_sample_ms: 0,
        }
    }

    /// Gate whose last sample was taken at `now`.
    pub fn armed(interval_ms: u64, now: u64) -> Self {
        Self {
            interval_ms,
            last_sample_ms: now,
        }
    }

    #[inline]
    pub fn interval(&self) -> u64 {
        self.interval_ms
    }

    #[inline]
    pub fn last_sample(&self) -> u64 {
        self.last_sample_ms
    }

    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Returns true and re-arms at `now` when the interval has elapsed.
    pub fn should_sample(&mut self, now: u64) -> bool {
        if now.wrapping_sub(self.last_sample_ms) > self.interval_ms {
            self.last_sample_ms = now;
            true
        } else {
            false
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INTERVAL_MS)
    }
}
