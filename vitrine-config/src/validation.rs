use thiserror::Error;
use vitrine_core::CenteringStrategy;

use crate::models::CarouselConfig;

/// Settings the controller cannot run with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval,
    #[error(
        "settle_delay_ms ({settle_delay_ms}) must exceed transition_ms ({transition_ms}) so centering measures final geometry"
    )]
    SettleDelayTooShort {
        settle_delay_ms: u64,
        transition_ms: u64,
    },
    #[error("swipe_threshold_px must be a finite, non-negative number (got {0})")]
    InvalidSwipeThreshold(f32),
    #[error("card metric `{field}` must be a finite, non-negative number (got {value})")]
    InvalidCardMetric { field: &'static str, value: f32 },
    #[error("placeholder_image is not a usable image reference: {0}")]
    InvalidPlaceholder(#[from] vitrine_model::ModelError),
}

/// Suspicious but runnable settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// Autoplay faster than the resize transition keeps cards permanently
    /// mid-animation.
    AutoplayFasterThanTransition { interval_ms: u64, transition_ms: u64 },
    /// The settle delay is configured but ignored by the chosen strategy.
    SettleDelayUnused,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::AutoplayFasterThanTransition {
                interval_ms,
                transition_ms,
            } => write!(
                f,
                "autoplay interval {interval_ms}ms is shorter than the {transition_ms}ms card transition"
            ),
            ConfigWarning::SettleDelayUnused => write!(
                f,
                "settle_delay_ms is only used with centering = \"settle_delay\""
            ),
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigGuardRailError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigGuardRailError::ZeroAutoplayInterval);
        }
        if self.settle_delay_ms <= self.transition_ms {
            return Err(ConfigGuardRailError::SettleDelayTooShort {
                settle_delay_ms: self.settle_delay_ms,
                transition_ms: self.transition_ms,
            });
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(ConfigGuardRailError::InvalidSwipeThreshold(
                self.swipe_threshold_px,
            ));
        }

        let card = &self.card;
        for (field, value) in [
            ("image_active", card.image_active),
            ("image_inactive", card.image_inactive),
            ("panel_width", card.panel_width),
            ("panel_gap", card.panel_gap),
            ("active_padding", card.active_padding),
            ("spacing", card.spacing),
            ("edge_padding", card.edge_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigGuardRailError::InvalidCardMetric { field, value });
            }
        }

        self.placeholder()?;

        let mut warnings = Vec::new();
        if self.autoplay && self.autoplay_interval_ms < self.transition_ms {
            warnings.push(ConfigWarning::AutoplayFasterThanTransition {
                interval_ms: self.autoplay_interval_ms,
                transition_ms: self.transition_ms,
            });
        }
        if self.centering != CenteringStrategy::SettleDelay
            && self.settle_delay_ms != CarouselConfig::default().settle_delay_ms
        {
            warnings.push(ConfigWarning::SettleDelayUnused);
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_without_warnings() {
        assert_eq!(CarouselConfig::default().validate(), Ok(vec![]));
    }

    #[test]
    fn settle_delay_must_exceed_transition() {
        let config = CarouselConfig {
            settle_delay_ms: 500,
            ..CarouselConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigGuardRailError::SettleDelayTooShort {
                settle_delay_ms: 500,
                transition_ms: 500,
            })
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = CarouselConfig {
            autoplay_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigGuardRailError::ZeroAutoplayInterval));
    }

    #[test]
    fn negative_metrics_are_rejected() {
        let mut config = CarouselConfig::default();
        config.card.spacing = -4.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigGuardRailError::InvalidCardMetric { field: "spacing", .. })
        ));
    }

    #[test]
    fn blank_placeholder_is_rejected() {
        let config = CarouselConfig {
            placeholder_image: " ".into(),
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigGuardRailError::InvalidPlaceholder(_))
        ));
    }

    #[test]
    fn fast_autoplay_only_warns() {
        let config = CarouselConfig {
            autoplay_interval_ms: 300,
            ..CarouselConfig::default()
        };
        assert_eq!(
            config.validate(),
            Ok(vec![ConfigWarning::AutoplayFasterThanTransition {
                interval_ms: 300,
                transition_ms: 500,
            }])
        );
    }
}
