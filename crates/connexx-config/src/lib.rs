//! Shell configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use connexx_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.app.target_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ShellConfig;

use std::path::Path;

use connexx_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` flag).
pub fn load_config_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
