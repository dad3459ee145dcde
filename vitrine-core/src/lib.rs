//! Headless carousel controller.
//!
//! Everything that decides *what* the carousel shows lives here: the active
//! index ring, autoplay and centering deadlines, drag/swipe classification,
//! strip geometry and the smooth-scroll tween. Time is always passed in as an
//! [`std::time::Instant`] so the controller can be driven by a UI runtime's
//! tick subscription or by a test clock alike.

pub mod animator;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod image_slot;
pub mod layout;
pub mod ring;
pub mod settings;
pub mod timers;
pub mod transition;

pub use animator::{Easing, ScrollAnimator};
pub use controller::{
    CarouselController, Lifecycle, NavKey, PauseCause, TickOutcome,
    ViewportMetrics,
};
pub use error::{CarouselError, Result};
pub use gesture::{DragTracker, GestureOutcome, SwipeDirection};
pub use image_slot::{FallbackAction, ImageSlot};
pub use layout::{CardBounds, CardMetrics, StripGeometry};
pub use ring::IndexRing;
pub use settings::{CenteringStrategy, ControllerSettings};
pub use timers::{Interval, OneShot};
pub use transition::ResizeTransition;
