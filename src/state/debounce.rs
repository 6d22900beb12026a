//! Quiet-period timer for the debounced validity recompute

use std::time::{Duration, Instant};

/// Fire-once deadline with explicit cancellation.
///
/// Every operation takes an explicit `now` so callers (and tests) own the
/// clock. A superseding `restart` replaces the pending deadline.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Quiet period after the last triggering event (500ms)
    pub const QUIET_PERIOD: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// (Re)arm the timer, superseding any pending deadline
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + Self::QUIET_PERIOD);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Time left until the deadline; `None` when idle
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// True exactly once when the deadline has passed; clears the timer
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = DebounceTimer::new();
        assert_eq!(timer.time_remaining(Instant::now()), None);
    }

    #[test]
    fn test_poll_before_deadline_does_not_fire() {
        let t0 = Instant::now();
        let mut timer = DebounceTimer::new();
        timer.restart(t0);

        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + Duration::from_millis(499)));
        assert!(timer.time_remaining(t0).is_some());
    }

    #[test]
    fn test_poll_fires_exactly_once() {
        let t0 = Instant::now();
        let mut timer = DebounceTimer::new();
        timer.restart(t0);

        let at_deadline = t0 + DebounceTimer::QUIET_PERIOD;
        assert!(timer.poll(at_deadline));
        assert!(!timer.poll(at_deadline));
        assert_eq!(timer.time_remaining(at_deadline), None);
    }

    #[test]
    fn test_restart_supersedes_pending_deadline() {
        let t0 = Instant::now();
        let mut timer = DebounceTimer::new();
        timer.restart(t0);
        timer.restart(t0 + Duration::from_millis(300));

        // The original deadline no longer fires
        assert!(!timer.poll(t0 + Duration::from_millis(500)));
        // The superseding one does
        assert!(timer.poll(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn test_cancel_clears_deadline() {
        let t0 = Instant::now();
        let mut timer = DebounceTimer::new();
        timer.restart(t0);
        timer.cancel();

        assert_eq!(timer.time_remaining(t0), None);
        assert!(!timer.poll(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_time_remaining_counts_down() {
        let t0 = Instant::now();
        let mut timer = DebounceTimer::new();
        timer.restart(t0);

        assert_eq!(
            timer.time_remaining(t0),
            Some(DebounceTimer::QUIET_PERIOD)
        );
        assert_eq!(
            timer.time_remaining(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        // Saturates at zero past the deadline
        assert_eq!(
            timer.time_remaining(t0 + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }
}
