//! Configuration for the Vitrine carousel.
//!
//! Settings are layered: an optional file (TOML or JSON) or inline JSON
//! provides the base, individual environment variables override single
//! knobs, and guard rails reject combinations the controller cannot honour
//! (for example a settle delay shorter than the resize transition).

pub mod env;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use env::EnvOverrides;
pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigSource,
    error::ConfigLoadError,
};
pub use models::CarouselConfig;
pub use validation::{ConfigGuardRailError, ConfigWarning};
