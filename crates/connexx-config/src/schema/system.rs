//! System configuration types: notifications and logging.

use serde::{Deserialize, Serialize};

/// Toast delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Also raise a native OS notification for every toast.
    pub native: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { native: true }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the shell's own crates.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "connexx=debug",
            Self::Info => "connexx=info",
            Self::Warning => "connexx=warn",
            Self::Error => "connexx=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
