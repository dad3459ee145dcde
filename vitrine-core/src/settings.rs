use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{animator::Easing, layout::CardMetrics};

/// When to measure the strip and scroll the active card into the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenteringStrategy {
    /// Center as soon as the resize transition reports completion.
    #[default]
    TransitionEnd,
    /// Center after a fixed settle delay following each index change.
    SettleDelay,
}

/// Runtime knobs for [`crate::CarouselController`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub autoplay: bool,
    pub autoplay_interval: Duration,
    /// Must exceed `transition` so the measurement sees final geometry.
    pub settle_delay: Duration,
    pub transition: Duration,
    pub centering: CenteringStrategy,
    /// Drags longer than this (in logical pixels) navigate instead of
    /// selecting the card under the pointer.
    pub swipe_threshold: f32,
    pub scroll_duration: Duration,
    pub scroll_easing: Easing,
    pub metrics: CardMetrics,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: Duration::from_millis(3_000),
            settle_delay: Duration::from_millis(550),
            transition: Duration::from_millis(500),
            centering: CenteringStrategy::TransitionEnd,
            swipe_threshold: 50.0,
            scroll_duration: Duration::from_millis(400),
            scroll_easing: Easing::EaseOut,
            metrics: CardMetrics::default(),
        }
    }
}
