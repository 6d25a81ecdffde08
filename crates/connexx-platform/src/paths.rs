//! Platform directory resolution.

use std::fs;
use std::path::PathBuf;

use connexx_common::PlatformError;

const APP_NAME: &str = "connexx";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/connexx`
/// - Linux: `$XDG_CONFIG_HOME/connexx` (defaults to `~/.config/connexx`)
/// - Windows: `%APPDATA%\connexx`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/connexx`
/// - Linux: `$XDG_DATA_HOME/connexx` (defaults to `~/.local/share/connexx`)
/// - Windows: `%APPDATA%\connexx`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Browser-engine profile directory: cookies, local storage, IndexedDB, cache.
///
/// Located at `data_dir()/webview`.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}

/// Creates the config and webview profile directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(webview_data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
