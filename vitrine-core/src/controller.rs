//! Carousel controller: the single owner of the active index.
//!
//! The controller holds every piece of mutable carousel state and exposes
//! one method per input the widget can receive (key press, pointer events,
//! viewport reports, clock ticks). Each call runs to completion and leaves
//! the invariants intact:
//!
//! * the active index is `Some(i)` with `i < len`, or `None` when empty;
//! * the drag start is only set between a press and its release;
//! * after [`CarouselController::unmount`] nothing mutates any more.
//!
//! Pausing is deliberately asymmetric: key presses, pointer presses and the
//! pointer entering the region all pause autoplay, only the pointer leaving
//! the region resumes it.

use std::time::Instant;

use crate::{
    animator::ScrollAnimator,
    error::{CarouselError, Result},
    gesture::{DragTracker, GestureOutcome, SwipeDirection},
    layout::StripGeometry,
    ring::IndexRing,
    settings::{CenteringStrategy, ControllerSettings},
    timers::{Interval, OneShot},
    transition::ResizeTransition,
};

/// Whether the controller still reacts to input and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// Keys the carousel reacts to. Any other key still pauses autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Show the previous card.
    Left,
    /// Show the next card.
    Right,
    Other,
}

/// Why the pause flag changed; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCause {
    Keyboard,
    PointerPress,
    PointerEnter,
    PointerLeave,
}

/// Last reported scrollable viewport, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub width: f32,
    /// Current horizontal scroll offset of the strip.
    pub offset_x: f32,
}

/// What happened during one [`CarouselController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    /// Autoplay moved to the next card.
    pub advanced: bool,
    /// A centering pass ran and picked this scroll target.
    pub centered: Option<f32>,
    /// Offset the strip should be scrolled to right now.
    pub scroll_to: Option<f32>,
}

impl TickOutcome {
    /// Nothing changed and nothing needs scrolling.
    pub fn is_idle(&self) -> bool {
        !self.advanced && self.centered.is_none() && self.scroll_to.is_none()
    }
}

/// Headless carousel state driven by input events and an injected clock.
#[derive(Debug, Clone)]
pub struct CarouselController {
    settings: ControllerSettings,
    lifecycle: Lifecycle,
    ring: IndexRing,
    active: Option<usize>,
    paused: bool,
    drag: DragTracker,
    autoplay: Interval,
    settle: OneShot,
    centering_pending: bool,
    transition: Option<ResizeTransition>,
    scroll: ScrollAnimator,
    viewport: Option<ViewportMetrics>,
}

impl CarouselController {
    /// Create the controller for `len` products, starting on the middle card.
    ///
    /// Autoplay starts counting immediately and the initial card is queued
    /// for centering, exactly like any later index change.
    pub fn mount(len: usize, settings: ControllerSettings, now: Instant) -> Self {
        let ring = IndexRing::new(len);
        let mut controller = Self {
            autoplay: Interval::new(settings.autoplay_interval),
            settings,
            lifecycle: Lifecycle::Mounted,
            ring,
            active: ring.middle(),
            paused: false,
            drag: DragTracker::new(),
            settle: OneShot::new(),
            centering_pending: false,
            transition: None,
            scroll: ScrollAnimator::new(),
            viewport: None,
        };

        if controller.autoplay_allowed() {
            controller.autoplay.start(now);
        }
        if controller.active.is_some() {
            controller.request_centering(now);
        }

        log::debug!(
            "carousel mounted: {} products, active={:?}, autoplay={}",
            len,
            controller.active,
            controller.autoplay.is_running()
        );
        controller
    }

    /// Release every timer and drag. All later calls are no-ops.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.autoplay.stop();
        self.settle.cancel();
        self.centering_pending = false;
        self.drag.cancel();
        self.scroll.cancel();
        self.transition = None;
        log::debug!("carousel unmounted at active={:?}", self.active);
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Settings the controller was mounted with.
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Number of products in the carousel.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The emphasised card, `None` only for an empty carousel.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Whether user interaction has suspended autoplay.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pointer x recorded at the press of an unfinished drag.
    pub fn drag_start_x(&self) -> Option<f32> {
        self.drag.start_x()
    }

    /// Last viewport reported by the shell, if any.
    pub fn viewport(&self) -> Option<ViewportMetrics> {
        self.viewport
    }

    /// True while the autoplay interval is scheduled.
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    // Navigation

    /// Advance to the following card, wrapping after the last one. Returns
    /// whether the active card changed.
    pub fn next(&mut self, now: Instant) -> bool {
        let Some(target) = self.active.and_then(|i| self.ring.next(i)) else {
            return false;
        };
        self.change_active(target, now)
    }

    /// Step back one card, wrapping before the first one.
    pub fn prev(&mut self, now: Instant) -> bool {
        let Some(target) = self.active.and_then(|i| self.ring.prev(i)) else {
            return false;
        };
        self.change_active(target, now)
    }

    /// Jump straight to `index`. Returns whether the active card changed.
    pub fn select_index(&mut self, index: usize, now: Instant) -> Result<bool> {
        if !self.is_mounted() {
            return Err(CarouselError::Unmounted);
        }
        if !self.ring.contains(index) {
            return Err(CarouselError::IndexOutOfBounds {
                index,
                len: self.ring.len(),
            });
        }
        Ok(self.change_active(index, now))
    }

    fn change_active(&mut self, target: usize, now: Instant) -> bool {
        if !self.is_mounted() || self.active == Some(target) {
            return false;
        }

        let from = self.active;
        self.transition = Some(ResizeTransition::start(
            self.transition.as_ref(),
            from,
            target,
            now,
            self.settings.transition,
        ));
        self.active = Some(target);
        self.request_centering(now);

        log::trace!("carousel active {:?} -> {}", from, target);
        true
    }

    // Input

    /// Any key pauses autoplay; arrows also navigate. Returns whether the
    /// active card changed.
    pub fn key_pressed(&mut self, key: NavKey, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.set_paused(true, PauseCause::Keyboard, now);
        match key {
            NavKey::Left => self.prev(now),
            NavKey::Right => self.next(now),
            NavKey::Other => false,
        }
    }

    /// Start tracking a drag at `x` and pause autoplay.
    pub fn pointer_pressed(&mut self, x: f32, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.set_paused(true, PauseCause::PointerPress, now);
        self.drag.press(x);
    }

    /// Finish a press at `x`. `target` is the card under the pointer, used
    /// when the drag was too short to count as a swipe.
    pub fn pointer_released(
        &mut self,
        x: f32,
        target: Option<usize>,
        now: Instant,
    ) -> GestureOutcome {
        if !self.is_mounted() {
            return GestureOutcome::Ignored;
        }

        let outcome = self.drag.release(x, self.settings.swipe_threshold);
        match outcome {
            GestureOutcome::Swipe(SwipeDirection::Forward) => {
                self.next(now);
            }
            GestureOutcome::Swipe(SwipeDirection::Backward) => {
                self.prev(now);
            }
            GestureOutcome::Click => {
                if let Some(index) = target
                    && let Err(err) = self.select_index(index, now)
                {
                    log::warn!("ignoring click on card {index}: {err}");
                }
            }
            GestureOutcome::Ignored => {}
        }
        outcome
    }

    /// Pause autoplay while the pointer hovers the carousel.
    pub fn pointer_entered(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.set_paused(true, PauseCause::PointerEnter, now);
    }

    /// The pointer left the carousel: drop any drag without navigating and
    /// resume autoplay.
    pub fn pointer_left(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        if self.drag.cancel() {
            log::trace!("carousel drag cancelled by pointer leaving");
        }
        self.set_paused(false, PauseCause::PointerLeave, now);
    }

    /// Toggle the pause flag. Autoplay restarts with a full interval only
    /// when the flag actually flips to `false`.
    fn set_paused(&mut self, paused: bool, cause: PauseCause, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if paused {
            self.autoplay.stop();
        } else if self.autoplay_allowed() {
            self.autoplay.start(now);
        }
        log::debug!("carousel paused={} ({:?})", paused, cause);
    }

    fn autoplay_allowed(&self) -> bool {
        self.settings.autoplay && !self.ring.is_empty() && !self.paused
    }

    // Geometry

    /// Record the scrollable's reported size and offset.
    pub fn set_viewport(&mut self, width: f32, offset_x: f32) {
        if !self.is_mounted() {
            return;
        }
        self.viewport = Some(ViewportMetrics { width, offset_x });
    }

    /// Emphasis of card `index` at `now`, `1.0` for the settled active card.
    pub fn emphasis(&self, index: usize, now: Instant) -> f32 {
        match &self.transition {
            Some(transition) => transition.emphasis(index, now),
            None if self.active == Some(index) => 1.0,
            None => 0.0,
        }
    }

    /// Geometry as currently drawn, including any running transition.
    pub fn geometry(&self, now: Instant) -> StripGeometry {
        StripGeometry::measure(&self.settings.metrics, self.len(), |index| {
            self.emphasis(index, now)
        })
    }

    /// Card under a pointer at `pointer_x` relative to the viewport's left
    /// edge.
    pub fn card_at(&self, pointer_x: f32, now: Instant) -> Option<usize> {
        let offset = self.viewport.map(|v| v.offset_x).unwrap_or(0.0);
        self.geometry(now).hit_test(offset + pointer_x)
    }

    // Timers

    fn request_centering(&mut self, now: Instant) {
        match self.settings.centering {
            CenteringStrategy::SettleDelay => {
                self.settle.arm(now, self.settings.settle_delay);
            }
            CenteringStrategy::TransitionEnd => {
                self.centering_pending = true;
            }
        }
    }

    fn centering_due(&mut self, now: Instant) -> bool {
        match self.settings.centering {
            CenteringStrategy::SettleDelay => self.settle.fire(now),
            CenteringStrategy::TransitionEnd => {
                let settled = self
                    .transition
                    .as_ref()
                    .is_none_or(|transition| transition.is_finished(now));
                if self.centering_pending && settled {
                    self.centering_pending = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Measure final geometry and start scrolling the active card to the
    /// middle. Returns the chosen target, or `None` when there is nothing to
    /// measure yet.
    pub fn center_active_item(&mut self, now: Instant) -> Option<f32> {
        let active = self.active?;
        let Some(viewport) = self.viewport else {
            log::trace!("carousel centering skipped: viewport not measured");
            return None;
        };

        let geometry =
            StripGeometry::settled(&self.settings.metrics, self.len(), active);
        let Some(target) = geometry.centered_offset(active, viewport.width) else {
            log::trace!("carousel centering skipped: no geometry for {active}");
            return None;
        };

        self.scroll.start(
            viewport.offset_x,
            target,
            now,
            self.settings.scroll_duration,
            self.settings.scroll_easing,
        );
        log::trace!(
            "carousel centering card {} from {:.1} to {:.1}",
            active,
            viewport.offset_x,
            target
        );
        Some(target)
    }

    /// Advance the clock: autoplay, then centering, then the scroll tween.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.is_mounted() {
            return outcome;
        }

        if self.autoplay.fire(now) {
            outcome.advanced = self.next(now);
        }

        if self.centering_due(now) {
            outcome.centered = self.center_active_item(now);
        }

        if self
            .transition
            .as_ref()
            .is_some_and(|transition| transition.is_finished(now))
            && !self.centering_pending
        {
            self.transition = None;
        }

        if let Some(offset) = self.scroll.tick(now) {
            if let Some(viewport) = self.viewport.as_mut() {
                viewport.offset_x = offset;
            }
            outcome.scroll_to = Some(offset);
        }

        outcome
    }

    /// True while something is animating and the shell should tick at frame
    /// rate.
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.is_mounted()
            && (self.scroll.is_active()
                || self
                    .transition
                    .as_ref()
                    .is_some_and(|transition| !transition.is_finished(now)))
    }

    /// True while a deadline is armed and the shell should keep polling.
    pub fn has_pending_timers(&self) -> bool {
        self.is_mounted()
            && (self.autoplay.is_running()
                || self.settle.is_armed()
                || self.centering_pending
                || self.transition.is_some())
    }

    /// Earliest instant at which [`Self::tick`] will have work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.is_mounted() {
            return None;
        }
        let transition_end = self
            .centering_pending
            .then(|| self.transition.as_ref().map(|t| t.finishes_at()))
            .flatten();
        [self.autoplay.due(), self.settle.due(), transition_end]
            .into_iter()
            .flatten()
            .min()
    }
}
