#![forbid(unsafe_code)]

//! Single-slot debounce scheduler.
//!
//! The scheduler holds at most one pending deadline. Scheduling while one
//! is pending replaces it, which collapses a burst of trigger signals into
//! one pass after a quiet period: N signals inside a debounce window yield
//! exactly one pass, fired one window after the *last* signal.
//!
//! A low-frequency fallback tick self-heals against missed trigger signals
//! (a UI mutation the external observer didn't catch): if
//! [`FALLBACK_INTERVAL_MS`] elapse without a pass, one becomes due
//! regardless of the pending slot. Every executed pass re-arms the
//! fallback.

/// Quiet period for ordinary triggers.
pub const DEBOUNCE_MS: u64 = 250;

/// Retry delay after a transient gate closure.
pub const RETRY_DELAY_MS: u64 = 300;

/// Delay of the first pass after engine construction.
pub const STARTUP_DELAY_MS: u64 = 50;

/// Self-heal interval when no trigger fires at all.
pub const FALLBACK_INTERVAL_MS: u64 = 15_000;

/// Margin added to cooldown-expiry retries so the pass lands strictly
/// after the corresponding window.
pub const COOLDOWN_SLACK_MS: u64 = 10;

/// Debouncing deadline holder. All instants are engine-clock milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    pending: Option<u64>,
    fallback_at: u64,
}

impl Scheduler {
    /// New scheduler with the startup kick armed.
    #[must_use]
    pub fn new(now: u64) -> Self {
        Self {
            pending: Some(now + STARTUP_DELAY_MS),
            fallback_at: now + FALLBACK_INTERVAL_MS,
        }
    }

    /// Arm (or replace) the pending deadline at `now + delay_ms`.
    pub fn schedule(&mut self, now: u64, delay_ms: u64) {
        self.pending = Some(now + delay_ms);
    }

    /// Arm a pass after the standard quiet period.
    pub fn schedule_debounced(&mut self, now: u64) {
        self.schedule(now, DEBOUNCE_MS);
    }

    /// Whether a deadline is armed (fallback aside).
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume a due deadline, if any. Returns `true` when a pass should
    /// run now; the fallback timer is re-armed whenever a pass fires.
    pub fn take_due(&mut self, now: u64) -> bool {
        if self.pending.is_some_and(|deadline| now >= deadline) {
            self.pending = None;
            self.fallback_at = now + FALLBACK_INTERVAL_MS;
            return true;
        }
        if now >= self.fallback_at {
            self.fallback_at = now + FALLBACK_INTERVAL_MS;
            return true;
        }
        false
    }

    /// The earliest instant a pass can become due (pending or fallback).
    #[must_use]
    pub fn next_deadline(&self) -> u64 {
        self.pending
            .map_or(self.fallback_at, |p| p.min(self.fallback_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_kick_is_armed() {
        let mut s = Scheduler::new(0);
        assert!(s.has_pending());
        assert!(!s.take_due(STARTUP_DELAY_MS - 1));
        assert!(s.take_due(STARTUP_DELAY_MS));
        assert!(!s.has_pending());
    }

    #[test]
    fn scheduling_replaces_the_pending_slot() {
        let mut s = Scheduler::new(0);
        // A burst of triggers, each replacing the previous deadline.
        s.schedule_debounced(100);
        s.schedule_debounced(150);
        s.schedule_debounced(200);

        // Nothing due at the deadline of the first trigger.
        assert!(!s.take_due(100 + DEBOUNCE_MS));
        // Exactly one pass, one window after the last trigger.
        assert!(s.take_due(200 + DEBOUNCE_MS));
        assert!(!s.take_due(200 + DEBOUNCE_MS + 1));
    }

    #[test]
    fn due_deadline_fires_once() {
        let mut s = Scheduler::new(0);
        s.schedule(0, 100);
        assert!(s.take_due(100));
        assert!(!s.take_due(101));
    }

    #[test]
    fn fallback_fires_after_silence() {
        let mut s = Scheduler::new(0);
        assert!(s.take_due(STARTUP_DELAY_MS)); // startup pass
        assert!(!s.take_due(FALLBACK_INTERVAL_MS + STARTUP_DELAY_MS - 1));
        assert!(s.take_due(FALLBACK_INTERVAL_MS + STARTUP_DELAY_MS));
    }

    #[test]
    fn pass_re_arms_the_fallback() {
        let mut s = Scheduler::new(0);
        assert!(s.take_due(50));
        s.schedule(60, 40);
        assert!(s.take_due(100));
        // Fallback counts from the last executed pass.
        assert!(!s.take_due(100 + FALLBACK_INTERVAL_MS - 1));
        assert!(s.take_due(100 + FALLBACK_INTERVAL_MS));
    }

    #[test]
    fn next_deadline_is_min_of_pending_and_fallback() {
        let mut s = Scheduler::new(0);
        assert_eq!(s.next_deadline(), STARTUP_DELAY_MS);

        let _ = s.take_due(STARTUP_DELAY_MS);
        assert_eq!(s.next_deadline(), STARTUP_DELAY_MS + FALLBACK_INTERVAL_MS);

        s.schedule(60, DEBOUNCE_MS);
        assert_eq!(s.next_deadline(), 60 + DEBOUNCE_MS);
    }

    #[test]
    fn late_poll_still_fires() {
        let mut s = Scheduler::new(0);
        s.schedule(0, 100);
        // Polled long after the deadline; the pass still runs.
        assert!(s.take_due(10_000));
    }
}
