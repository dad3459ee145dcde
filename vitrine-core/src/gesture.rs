//! Press/release classification for pointer drags.

/// Navigation direction implied by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged right-to-left: show the next card.
    Forward,
    /// Dragged left-to-right: show the previous card.
    Backward,
}

/// What a completed press/release pair means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Release without a matching press.
    Ignored,
    Swipe(SwipeDirection),
    /// Short drag; resolve against the card under the pointer.
    Click,
}

/// Tracks the horizontal position of an active press.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    start_x: Option<f32>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember where the drag started.
    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn start_x(&self) -> Option<f32> {
        self.start_x
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the drag. The tracker is always reset, whatever the outcome.
    ///
    /// Only a distance strictly greater than `threshold` counts as a swipe.
    pub fn release(&mut self, x: f32, threshold: f32) -> GestureOutcome {
        let Some(start) = self.start_x.take() else {
            return GestureOutcome::Ignored;
        };

        let distance = start - x;
        if distance.abs() > threshold {
            if distance > 0.0 {
                GestureOutcome::Swipe(SwipeDirection::Forward)
            } else {
                GestureOutcome::Swipe(SwipeDirection::Backward)
            }
        } else {
            GestureOutcome::Click
        }
    }

    /// Drop an in-flight drag. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.start_x.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_to_left_drag_is_forward_swipe() {
        let mut drag = DragTracker::new();
        drag.press(200.0);
        assert_eq!(
            drag.release(140.0, 50.0),
            GestureOutcome::Swipe(SwipeDirection::Forward)
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn left_to_right_drag_is_backward_swipe() {
        let mut drag = DragTracker::new();
        drag.press(140.0);
        assert_eq!(
            drag.release(200.0, 50.0),
            GestureOutcome::Swipe(SwipeDirection::Backward)
        );
    }

    #[test]
    fn threshold_distance_is_still_a_click() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        assert_eq!(drag.release(50.0, 50.0), GestureOutcome::Click);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.release(10.0, 50.0), GestureOutcome::Ignored);
    }

    #[test]
    fn cancel_reports_whether_a_drag_was_active() {
        let mut drag = DragTracker::new();
        assert!(!drag.cancel());
        drag.press(12.0);
        assert_eq!(drag.start_x(), Some(12.0));
        assert!(drag.cancel());
        assert_eq!(drag.start_x(), None);
    }
}
