//! Handoff of URLs to the user's default system browser.

use connexx_common::PlatformError;
use tracing::info;

/// The host's "view this URL externally" facility.
///
/// Fire-and-forget: a successful return means the request was handed to
/// the platform, not that a page finished loading anywhere.
pub trait ExternalOpener {
    fn open_external(&self, url: &str) -> Result<(), PlatformError>;
}

/// Opens URLs with the OS default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl ExternalOpener for SystemBrowser {
    #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        open::that_detached(url)
            .map_err(|e| PlatformError::ExternalHandler(format!("failed to open {url}: {e}")))?;
        info!(url = %url, "opened in system browser");
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        Err(PlatformError::NotSupported(format!(
            "no system browser handoff on this platform ({url})"
        )))
    }
}
