//! Configuration schema types for the shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod navigation;
mod system;
mod window;

pub use app::*;
pub use navigation::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShellConfig {
    pub app: AppConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

impl ShellConfig {
    /// Replace the target URL with an explicit override (CLI or environment).
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.app.url = Some(url);
        }
        self
    }
}
