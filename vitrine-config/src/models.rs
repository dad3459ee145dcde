use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitrine_core::{CardMetrics, CenteringStrategy, ControllerSettings, Easing};
use vitrine_model::ImageRef;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/400x400/CCCCCC/FFFFFF?text=Image+Not+Found";

/// Carousel behaviour and layout. Every field has a default, so a config
/// file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Advance automatically while nobody interacts with the carousel.
    pub autoplay: bool,
    /// Delay between autoplay steps (ms).
    pub autoplay_interval_ms: u64,
    /// Wait after an index change before measuring the strip (ms). Only used
    /// with the `settle_delay` centering strategy, but always validated
    /// against `transition_ms`.
    pub settle_delay_ms: u64,
    /// Duration of the card grow/shrink transition (ms).
    pub transition_ms: u64,
    pub centering: CenteringStrategy,
    /// Minimum horizontal drag (logical px) that counts as a swipe.
    pub swipe_threshold_px: f32,
    /// Duration of the smooth scroll that centers the active card (ms).
    pub scroll_duration_ms: u64,
    pub scroll_easing: Easing,
    /// Image shown once when a product image fails to load.
    pub placeholder_image: String,
    /// Tick interval while something animates (ms).
    pub frame_interval_ms: u64,
    /// Tick interval while only timers are pending (ms).
    pub timer_poll_ms: u64,
    pub card: CardMetrics,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: 3_000,
            settle_delay_ms: 550,
            transition_ms: 500,
            centering: CenteringStrategy::TransitionEnd,
            swipe_threshold_px: 50.0,
            scroll_duration_ms: 400,
            scroll_easing: Easing::EaseOut,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            frame_interval_ms: 16,
            timer_poll_ms: 50,
            card: CardMetrics::default(),
        }
    }
}

impl CarouselConfig {
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            autoplay: self.autoplay,
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            transition: Duration::from_millis(self.transition_ms),
            centering: self.centering,
            swipe_threshold: self.swipe_threshold_px,
            scroll_duration: Duration::from_millis(self.scroll_duration_ms),
            scroll_easing: self.scroll_easing,
            metrics: self.card,
        }
    }

    pub fn placeholder(&self) -> vitrine_model::Result<ImageRef> {
        ImageRef::parse(&self.placeholder_image)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn timer_poll(&self) -> Duration {
        Duration::from_millis(self.timer_poll_ms.max(1))
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow::anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_controller_defaults() {
        assert_eq!(
            CarouselConfig::default().controller_settings(),
            ControllerSettings::default()
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = CarouselConfig::parse_from_str(
            r#"
                autoplay_interval_ms = 4500
                centering = "settle_delay"

                [card]
                spacing = 24.0
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.autoplay_interval_ms, 4_500);
        assert_eq!(config.centering, CenteringStrategy::SettleDelay);
        assert_eq!(config.card.spacing, 24.0);
        assert_eq!(config.card.image_active, 280.0);
        assert_eq!(config.swipe_threshold_px, 50.0);
    }

    #[test]
    fn json_is_accepted_as_fallback() {
        let config = CarouselConfig::parse_from_str(
            r#"{"autoplay": false, "scroll_easing": "linear"}"#,
            "inline",
        )
        .unwrap();
        assert!(!config.autoplay);
        assert_eq!(config.scroll_easing, Easing::Linear);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = CarouselConfig::parse_from_str("autoplay = [", "broken.cfg")
            .unwrap_err()
            .to_string();
        assert!(err.contains("broken.cfg"));
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }

    #[test]
    fn default_placeholder_is_remote() {
        assert!(CarouselConfig::default().placeholder().unwrap().is_remote());
    }
}
