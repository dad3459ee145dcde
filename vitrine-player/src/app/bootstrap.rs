use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use iced::Task;
use vitrine_config::{CarouselConfig, ConfigLoader};

use crate::catalog::Catalog;
use crate::messages::Message;
use crate::state::State;

pub const CATALOG_ENV: &str = "VITRINE_CATALOG";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub carousel: CarouselConfig,
    pub catalog: Catalog,
}

impl AppConfig {
    /// Load `.env`, the carousel configuration and the product catalog.
    pub fn from_environment() -> anyhow::Result<Self> {
        let load = ConfigLoader::new()
            .load()
            .context("failed to load carousel configuration")?;
        log::info!(
            "carousel configuration from {:?} (env file loaded: {})",
            load.source,
            load.env_file_loaded
        );

        let catalog_path = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
        let catalog = match &catalog_path {
            Some(path) => Catalog::load(path).with_context(|| {
                format!("failed to load catalog from {}", path.display())
            })?,
            None => {
                log::info!("{CATALOG_ENV} not set, using the demo catalog");
                Catalog::demo().context("failed to build demo catalog")?
            }
        };

        Ok(Self {
            carousel: load.config,
            catalog,
        })
    }
}

/// Initial state plus the image fetches of the first mount.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let mut state = State::new(config.catalog.clone(), config.carousel.clone());
    let task = state.mount_carousel(Instant::now());
    (state, task)
}
