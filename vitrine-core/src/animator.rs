//! Time-based tween used to smooth-scroll the strip to a centered offset.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Tween of the strip's horizontal scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a tween from `current` to `target`, replacing any running one.
    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    }

    #[test]
    fn tween_progresses_then_lands_on_target() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new();
        animator.start(0.0, 100.0, t0, Duration::from_millis(400), Easing::Linear);

        assert!(animator.is_active());
        let mid = animator.tick(t0 + Duration::from_millis(200)).unwrap();
        assert!((mid - 50.0).abs() < 0.01);
        assert_eq!(animator.tick(t0 + Duration::from_millis(400)), Some(100.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new();
        animator.start(10.0, 90.0, t0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(animator.tick(t0), Some(90.0));
    }

    #[test]
    fn cancelled_tween_yields_nothing() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new();
        animator.start(0.0, 10.0, t0, Duration::from_millis(100), Easing::Linear);
        animator.cancel();
        assert_eq!(animator.tick(t0 + Duration::from_millis(50)), None);
        assert!(!animator.is_active());
    }

    #[test]
    fn easing_parses_from_snake_case() {
        let easing: Easing = serde_json::from_str(r#""ease_in_out""#).unwrap();
        assert_eq!(easing, Easing::EaseInOut);
    }
}
