//! Remote application target.

use serde::{Deserialize, Serialize};

/// Production deployment of the remote application.
pub const PRODUCTION_URL: &str = "https://mvai-connexx.com";
/// Staging deployment.
pub const STAGING_URL: &str = "https://mvai-connexx.onrender.com";
/// Development server on the host machine, as seen from an Android emulator.
pub const LOCAL_URL: &str = "http://10.0.2.2:5000";

/// Deployment the shell points at when no explicit URL is configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Local,
}

impl Environment {
    pub fn preset_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Staging => STAGING_URL,
            Self::Local => LOCAL_URL,
        }
    }
}

/// Which remote application the shell loads at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    /// Explicit URL. Takes precedence over `environment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AppConfig {
    /// The URL issued as the initial load.
    pub fn target_url(&self) -> &str {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim(),
            _ => self.environment.preset_url(),
        }
    }
}
