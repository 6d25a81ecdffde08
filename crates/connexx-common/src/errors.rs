use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("external handler error: {0}")]
    ExternalHandler(String),

    #[error("notification error: {0}")]
    NotificationError(String),

    #[error("connectivity query error: {0}")]
    Connectivity(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures reported by a browser surface implementation.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed: {0}")]
    Creation(String),

    #[error("load failed for {url}: {reason}")]
    Load { url: String, reason: String },

    #[error("script evaluation failed: {0}")]
    Script(String),
}
