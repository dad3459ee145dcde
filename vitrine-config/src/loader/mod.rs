pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    env::EnvOverrides, models::CarouselConfig, validation::ConfigWarning,
};
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "vitrine.toml",
    "vitrine.json",
    "config/vitrine.toml",
    "config/vitrine.json",
];

/// Where the base configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory the default locations are resolved against. Defaults to the
    /// working directory.
    pub search_root: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CarouselConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Environment variables that overrode a file or default value.
    pub overrides: Vec<&'static str>,
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.search_root = Some(path.into());
        self
    }

    /// Load `.env`, then the process environment, then compose.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with(EnvOverrides::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose a configuration from already gathered environment values.
    pub fn load_with(
        &self,
        env: EnvOverrides,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        if let Some((name, value)) = env.invalid.first() {
            return Err(ConfigLoadError::InvalidOverride {
                name: *name,
                value: value.clone(),
            });
        }

        let (mut config, source) = self.load_base(&env)?;
        let overrides = env.apply(&mut config);
        let warnings = config.validate()?;

        for warning in &warnings {
            log::warn!("carousel config: {warning}");
        }
        log::debug!(
            "carousel config loaded from {:?} with overrides {:?}",
            source,
            overrides
        );

        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded: false,
            overrides,
            warnings,
        })
    }

    fn load_base(
        &self,
        env: &EnvOverrides,
    ) -> Result<(CarouselConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = load_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = load_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = serde_json::from_str(raw).map_err(|err| {
                ConfigLoadError::Parse(anyhow::anyhow!(
                    "invalid carousel config json: {err}"
                ))
            })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((CarouselConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

fn load_file(path: &Path) -> Result<CarouselConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|err| {
            ConfigLoadError::Parse(anyhow::anyhow!(
                "invalid carousel config {}: {}",
                path.display(),
                err
            ))
        }),
        Some("toml") => toml::from_str(&contents).map_err(|err| {
            ConfigLoadError::Parse(anyhow::anyhow!(
                "invalid carousel config {}: {}",
                path.display(),
                err
            ))
        }),
        _ => CarouselConfig::parse_from_str(
            &contents,
            &path.display().to_string(),
        )
        .map_err(ConfigLoadError::Parse),
    }
}
