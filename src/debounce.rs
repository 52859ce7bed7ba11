//! Quiet-period timer for text input
//!
//! A [`Debouncer`] holds at most one pending deadline. Each `schedule` call
//! supersedes the previous one, so only the last call within a quiet period
//! ever fires. Time is passed in by the caller, which keeps the timer free of
//! any runtime or terminal dependency.

use std::time::{Duration, Instant};

/// Default quiet period for keystroke-triggered queries
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer to fire one quiet period after `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Drop the pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the quiet period has elapsed
    ///
    /// Returns `true` at most once per schedule.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending deadline, if any
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn does_not_fire_before_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.schedule(start);

        assert!(!debouncer.fire(start));
        assert!(!debouncer.fire(start + Duration::from_millis(299)));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.schedule(start);

        assert!(debouncer.fire(start + QUIET));
        assert!(!debouncer.fire(start + QUIET * 2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn rescheduling_pushes_deadline_back() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(200));
        assert_eq!(debouncer.remaining(start), Some(Duration::from_millis(500)));

        // The first deadline has passed, but it was superseded
        assert!(!debouncer.fire(start + Duration::from_millis(350)));
        assert!(debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn burst_of_keystrokes_fires_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        let mut fired = 0;

        for step in 0..10u64 {
            let now = start + Duration::from_millis(step * 50);
            debouncer.schedule(now);
            if debouncer.fire(now) {
                fired += 1;
            }
        }
        let end = start + Duration::from_millis(450) + QUIET;
        if debouncer.fire(end) {
            fired += 1;
        }

        assert_eq!(fired, 1);
    }

    #[test]
    fn cancel_drops_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.schedule(start);

        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(start + QUIET));
        assert_eq!(debouncer.remaining(start), None);
    }

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        assert_eq!(debouncer.remaining(start), None);

        debouncer.schedule(start);
        assert_eq!(debouncer.remaining(start), Some(QUIET));
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            debouncer.remaining(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
