//! Resize transition between the previously active card and the new one.

use std::time::{Duration, Instant};

use crate::animator::Easing;

/// Cards grow and shrink together over a fixed duration. The outgoing card
/// starts from whatever emphasis it had when the transition began, so
/// rapid navigation does not snap a half-grown card back to full size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeTransition {
    from: Option<usize>,
    from_level: f32,
    to: usize,
    to_level: f32,
    started_at: Instant,
    duration: Duration,
}

impl ResizeTransition {
    /// Begin swapping emphasis from `from` to `to`, continuing from the
    /// levels of `previous` if it is still running.
    pub fn start(
        previous: Option<&ResizeTransition>,
        from: Option<usize>,
        to: usize,
        now: Instant,
        duration: Duration,
    ) -> Self {
        let level = |index: usize, settled: f32| match previous {
            Some(prev) if !prev.is_finished(now) => prev.emphasis(index, now),
            _ => settled,
        };
        Self {
            from,
            from_level: from.map(|i| level(i, 1.0)).unwrap_or(0.0),
            to,
            to_level: level(to, 0.0),
            started_at: now,
            duration,
        }
    }

    pub fn finishes_at(&self) -> Instant {
        self.started_at + self.duration
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.finishes_at()
    }

    /// Emphasis of a card at `now`.
    pub fn emphasis(&self, index: usize, now: Instant) -> f32 {
        let p = Easing::EaseInOut.apply(self.progress(now));
        if index == self.to {
            self.to_level + (1.0 - self.to_level) * p
        } else if Some(index) == self.from {
            self.from_level * (1.0 - p)
        } else {
            0.0
        }
    }
}
