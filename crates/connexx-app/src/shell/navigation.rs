//! Per-navigation state and surface event handling.

use connexx_common::Notification;
use connexx_platform::{ExternalOpener, Notifier};
use connexx_webview::{dispatch, BrowserSurface, NavigationObserver, ProgressObserver, SurfaceEvent};
use tracing::{debug, warn};

use super::core::AppShell;
use super::LOAD_FAILED_PREFIX;

/// Progress of the navigation currently shown in the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl<S, O, N> AppShell<S, O, N>
where
    S: BrowserSurface,
    O: ExternalOpener,
    N: Notifier,
{
    /// Drain and handle every event the surface queued since the last call.
    pub fn pump(&mut self) {
        let events = match self.surface.as_mut() {
            Some(surface) => surface.drain_events(),
            None => return,
        };
        for event in events {
            if dispatch(&event, self) {
                continue;
            }
            match event {
                SurfaceEvent::ExternalNavigation { url } => self.open_externally(&url),
                SurfaceEvent::NewWindowRequested { url } => self.load_in_surface(&url),
                _ => {}
            }
        }
    }

    pub(super) fn fail_navigation(&mut self, url: &str, code: i32, description: &str) {
        warn!(url = %url, code, description, "navigation failed");
        self.navigation = NavigationState::Errored;
        self.progress.hide();
        self.notifier
            .show(Notification::error(format!("{LOAD_FAILED_PREFIX}{description}")));
    }
}

impl<S, O, N> NavigationObserver for AppShell<S, O, N>
where
    S: BrowserSurface,
    O: ExternalOpener,
    N: Notifier,
{
    fn on_start(&mut self, url: &str) {
        debug!(url = %url, "navigation started");
        self.navigation = NavigationState::Loading;
        self.progress.start();
    }

    fn on_finish(&mut self, url: &str) {
        debug!(url = %url, "navigation finished");
        self.navigation = NavigationState::Loaded;
        self.progress.hide();
    }

    fn on_error(&mut self, url: &str, code: i32, description: &str) {
        self.fail_navigation(url, code, description);
    }
}

impl<S, O, N> ProgressObserver for AppShell<S, O, N>
where
    S: BrowserSurface,
    O: ExternalOpener,
    N: Notifier,
{
    fn on_progress(&mut self, percent: u8) {
        if self.navigation != NavigationState::Loading {
            return;
        }
        self.progress.update(percent);
    }
}
