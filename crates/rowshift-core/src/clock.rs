#![forbid(unsafe_code)]

//! Monotonic millisecond clock behind a trait, so gate and scheduler logic
//! is testable without real sleeps.

use web_time::Instant;

/// Source of monotonic milliseconds.
///
/// The engine never needs wall-clock time; cooldowns, pauses, and debounce
/// deadlines are all relative intervals.
pub trait Clock {
    /// Milliseconds elapsed since this clock's origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Real clock anchored at construction time.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl<C: Clock> Clock for &C {
    fn now_ms(&self) -> u64 {
        (*self).now_ms()
    }
}
