//! Deadline bookkeeping for the controller's two timers.
//!
//! Neither timer owns a thread or a runtime handle. They only remember when
//! they are due; whoever drives the controller polls them with the current
//! instant. Cancelling is therefore just forgetting the deadline.

use std::time::{Duration, Instant};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A single pending deadline. Re-arming replaces the previous deadline, so
/// only the most recent request can ever fire.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer. Any earlier deadline is forgotten.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Periodic deadline used for autoplay.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start counting a full period from `now`, discarding any previous
    /// schedule.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Fire at most once per poll.
    ///
    /// The next deadline is scheduled from the previous one so polling
    /// jitter does not accumulate. When a poll arrives more than a full
    /// period late the missed beats are dropped rather than replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let mut next = due + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next_due = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::new();
        timer.arm(t0, ms(550));

        assert!(!timer.fire(t0 + ms(549)));
        assert!(timer.fire(t0 + ms(550)));
        assert!(!timer.fire(t0 + ms(2_000)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_supersedes_pending_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::new();
        timer.arm(t0, ms(550));
        timer.arm(t0 + ms(300), ms(550));

        assert_eq!(timer.due(), Some(t0 + ms(850)));
        // The first deadline would have been t0 + 550.
        assert!(!timer.fire(t0 + ms(600)));
        assert!(timer.fire(t0 + ms(850)));
    }

    #[test]
    fn cancelled_one_shot_never_fires() {
        let t0 = Instant::now();
        let mut timer = OneShot::new();
        timer.arm(t0, ms(10));
        timer.cancel();
        assert!(!timer.fire(t0 + ms(100)));
    }

    #[test]
    fn interval_fires_once_per_period() {
        let t0 = Instant::now();
        let mut interval = Interval::new(ms(3_000));
        interval.start(t0);

        assert!(!interval.fire(t0 + ms(2_999)));
        assert!(interval.fire(t0 + ms(3_000)));
        assert!(!interval.fire(t0 + ms(3_000)));
        assert!(!interval.fire(t0 + ms(5_999)));
        assert!(interval.fire(t0 + ms(6_020)));
        // Schedule stays anchored to the original beat.
        assert_eq!(interval.due(), Some(t0 + ms(9_000)));
    }

    #[test]
    fn late_poll_drops_missed_beats() {
        let t0 = Instant::now();
        let mut interval = Interval::new(ms(3_000));
        interval.start(t0);

        assert!(interval.fire(t0 + ms(10_000)));
        assert!(!interval.fire(t0 + ms(10_001)));
        assert_eq!(interval.due(), Some(t0 + ms(13_000)));
    }

    #[test]
    fn stopped_interval_is_silent() {
        let t0 = Instant::now();
        let mut interval = Interval::new(ms(3_000));
        interval.start(t0);
        interval.stop();
        assert!(!interval.fire(t0 + ms(30_000)));
    }

    #[test]
    fn zero_period_is_clamped() {
        let interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.period(), MIN_PERIOD);
    }
}
