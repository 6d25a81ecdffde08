//! AppShell struct definition and creation.

use std::sync::Arc;

use connexx_common::{Notification, SurfaceError};
use connexx_platform::{ConnectivityProbe, ExternalOpener, Notifier};
use connexx_webview::{
    BrowserSurface, Capabilities, NavigationDecision, NavigationInterceptor, ERROR_UNKNOWN,
};
use tracing::{debug, error, info, warn};

use super::lifecycle::LifecycleState;
use super::navigation::NavigationState;
use super::progress::ProgressIndicator;
use super::CONNECTIVITY_MESSAGE;

/// Top-level shell state.
pub struct AppShell<S, O, N> {
    /// `None` when creation failed or after destroy.
    pub(super) surface: Option<S>,
    pub(super) opener: O,
    pub(super) notifier: N,
    pub(super) interceptor: Arc<dyn NavigationInterceptor>,
    pub(super) lifecycle: LifecycleState,
    pub(super) navigation: NavigationState,
    pub(super) progress: ProgressIndicator,
}

impl<S, O, N> AppShell<S, O, N>
where
    S: BrowserSurface,
    O: ExternalOpener,
    N: Notifier,
{
    /// Create the shell and issue the initial load of `initial_url`.
    ///
    /// `build_surface` receives the fixed capability set and the
    /// interceptor every later navigation must pass through. If it fails,
    /// the shell still comes up without a surface and reports the failure.
    pub fn create<F>(
        initial_url: &str,
        interceptor: Arc<dyn NavigationInterceptor>,
        opener: O,
        notifier: N,
        connectivity: &dyn ConnectivityProbe,
        build_surface: F,
    ) -> Self
    where
        F: FnOnce(&Capabilities, Arc<dyn NavigationInterceptor>) -> Result<S, SurfaceError>,
    {
        let mut shell = Self {
            surface: None,
            opener,
            notifier,
            interceptor,
            lifecycle: LifecycleState::Created,
            navigation: NavigationState::Idle,
            progress: ProgressIndicator::default(),
        };

        if !connectivity.is_network_available() {
            warn!("no network connection at launch; loading anyway");
            shell.notifier.show(Notification::warning(CONNECTIVITY_MESSAGE));
        }

        let capabilities = Capabilities::shell();
        match build_surface(&capabilities, Arc::clone(&shell.interceptor)) {
            Ok(surface) => shell.surface = Some(surface),
            Err(e) => {
                error!(error = %e, "browser surface creation failed");
                shell
                    .notifier
                    .show(Notification::error(format!("Could not start the browser: {e}")));
            }
        }

        info!(url = %initial_url, "shell created");
        shell.navigate(initial_url);
        shell
    }

    /// Route a shell-initiated navigation through the interceptor.
    fn navigate(&mut self, url: &str) {
        match self.interceptor.intercept(url) {
            NavigationDecision::LoadInSurface => self.load_in_surface(url),
            NavigationDecision::OpenExternally => self.open_externally(url),
        }
    }

    /// Load `url` in the surface without consulting the interceptor again.
    pub(super) fn load_in_surface(&mut self, url: &str) {
        let result = match self.surface.as_mut() {
            Some(surface) => surface.load_url(url),
            None => {
                debug!(url = %url, "no surface; load skipped");
                return;
            }
        };
        if let Err(e) = result {
            let description = match e {
                SurfaceError::Load { reason, .. } => reason,
                other => other.to_string(),
            };
            warn!(url = %url, error = %description, "load request rejected");
            self.fail_navigation(url, ERROR_UNKNOWN, &description);
        }
    }

    pub(super) fn open_externally(&mut self, url: &str) {
        match self.opener.open_external(url) {
            Ok(()) => info!(url = %url, "handed to system browser"),
            Err(e) => {
                warn!(url = %url, error = %e, "system browser handoff failed");
                self.notifier
                    .show(Notification::error(format!("Could not open {url}")));
            }
        }
    }

    /// The surface, if it was created and has not been destroyed.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }
}
