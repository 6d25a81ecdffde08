//! Host lifecycle forwarding and back input.

use connexx_platform::{ExternalOpener, Notifier};
use connexx_webview::BrowserSurface;
use tracing::{debug, info};

use super::core::AppShell;

/// Where the shell is in its host-driven life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Foreground,
    Background,
    Destroyed,
}

/// A lifecycle signal from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    Resume,
    Pause,
    Destroy,
}

impl LifecycleState {
    /// The state reached by applying `signal`, or `None` when the signal
    /// has no effect in this state.
    pub fn transition(self, signal: LifecycleSignal) -> Option<Self> {
        use LifecycleSignal::*;
        use LifecycleState::*;
        match (self, signal) {
            (Destroyed, _) => None,
            (_, Destroy) => Some(Destroyed),
            (Created | Background, Resume) => Some(Foreground),
            (Created | Foreground, Pause) => Some(Background),
            (Foreground, Resume) | (Background, Pause) => None,
        }
    }
}

impl<S, O, N> AppShell<S, O, N>
where
    S: BrowserSurface,
    O: ExternalOpener,
    N: Notifier,
{
    pub fn resume(&mut self) {
        self.apply(LifecycleSignal::Resume);
    }

    pub fn pause(&mut self) {
        self.apply(LifecycleSignal::Pause);
    }

    /// Tear down the surface. Later signals are ignored.
    pub fn destroy(&mut self) {
        self.apply(LifecycleSignal::Destroy);
    }

    fn apply(&mut self, signal: LifecycleSignal) {
        let Some(next) = self.lifecycle.transition(signal) else {
            debug!(state = ?self.lifecycle, ?signal, "lifecycle signal ignored");
            return;
        };
        info!(from = ?self.lifecycle, to = ?next, "lifecycle transition");
        self.lifecycle = next;

        match signal {
            LifecycleSignal::Resume => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.resume();
                }
            }
            LifecycleSignal::Pause => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.pause();
                }
            }
            LifecycleSignal::Destroy => {
                if let Some(mut surface) = self.surface.take() {
                    surface.destroy();
                }
                self.progress.hide();
            }
        }
    }

    /// Handle a host back input. Returns `true` when the input was consumed
    /// by stepping back inside the surface; otherwise the host's default
    /// back behavior applies.
    pub fn handle_back(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if !surface.can_go_back() {
            debug!("back input not consumed: no surface history");
            return false;
        }
        surface.go_back();
        debug!("back input consumed");
        true
    }
}
