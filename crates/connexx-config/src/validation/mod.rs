//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod app;
mod helpers;
mod navigation;
mod window;


use crate::schema::ShellConfig;
use connexx_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    app::validate_app(&mut errors, config);
    navigation::validate_navigation(&mut errors, config);
    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
