//! Single-knob overrides read from the environment.

use std::path::PathBuf;

use crate::{
    models::CarouselConfig,
    util::{parse_bool, parse_duration_ms},
};

pub const CONFIG_PATH_VAR: &str = "VITRINE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "VITRINE_CONFIG_JSON";
pub const AUTOPLAY_VAR: &str = "VITRINE_AUTOPLAY";
pub const AUTOPLAY_INTERVAL_VAR: &str = "VITRINE_AUTOPLAY_INTERVAL";
pub const SETTLE_DELAY_VAR: &str = "VITRINE_SETTLE_DELAY";
pub const SWIPE_THRESHOLD_VAR: &str = "VITRINE_SWIPE_THRESHOLD";
pub const PLACEHOLDER_VAR: &str = "VITRINE_PLACEHOLDER_IMAGE";

/// Values gathered from the environment. Unparseable values are kept as
/// `None` and reported through `invalid`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub autoplay: Option<bool>,
    pub autoplay_interval_ms: Option<u64>,
    pub settle_delay_ms: Option<u64>,
    pub swipe_threshold_px: Option<f32>,
    pub placeholder_image: Option<String>,
    pub invalid: Vec<(&'static str, String)>,
}

impl EnvOverrides {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build overrides from any name -> value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };

        let mut overrides = EnvOverrides {
            config_path: non_empty(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: non_empty(CONFIG_JSON_VAR),
            placeholder_image: non_empty(PLACEHOLDER_VAR),
            ..Self::default()
        };

        if let Some(raw) = non_empty(AUTOPLAY_VAR) {
            match parse_bool(&raw) {
                Some(value) => overrides.autoplay = Some(value),
                None => overrides.invalid.push((AUTOPLAY_VAR, raw)),
            }
        }
        if let Some(raw) = non_empty(AUTOPLAY_INTERVAL_VAR) {
            match parse_duration_ms(&raw) {
                Some(value) => overrides.autoplay_interval_ms = Some(value),
                None => overrides.invalid.push((AUTOPLAY_INTERVAL_VAR, raw)),
            }
        }
        if let Some(raw) = non_empty(SETTLE_DELAY_VAR) {
            match parse_duration_ms(&raw) {
                Some(value) => overrides.settle_delay_ms = Some(value),
                None => overrides.invalid.push((SETTLE_DELAY_VAR, raw)),
            }
        }
        if let Some(raw) = non_empty(SWIPE_THRESHOLD_VAR) {
            match raw.trim().parse::<f32>() {
                Ok(value) => overrides.swipe_threshold_px = Some(value),
                Err(_) => overrides.invalid.push((SWIPE_THRESHOLD_VAR, raw)),
            }
        }

        overrides
    }

    /// Apply the single-knob overrides and return the names that changed.
    pub fn apply(&self, config: &mut CarouselConfig) -> Vec<&'static str> {
        let mut applied = Vec::new();
        if let Some(value) = self.autoplay {
            config.autoplay = value;
            applied.push(AUTOPLAY_VAR);
        }
        if let Some(value) = self.autoplay_interval_ms {
            config.autoplay_interval_ms = value;
            applied.push(AUTOPLAY_INTERVAL_VAR);
        }
        if let Some(value) = self.settle_delay_ms {
            config.settle_delay_ms = value;
            applied.push(SETTLE_DELAY_VAR);
        }
        if let Some(value) = self.swipe_threshold_px {
            config.swipe_threshold_px = value;
            applied.push(SWIPE_THRESHOLD_VAR);
        }
        if let Some(value) = &self.placeholder_image {
            config.placeholder_image = value.clone();
            applied.push(PLACEHOLDER_VAR);
        }
        applied
    }
}
