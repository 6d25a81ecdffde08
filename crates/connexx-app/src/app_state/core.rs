//! ConnexxApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use connexx_config::ShellConfig;
use connexx_platform::SystemBrowser;
use connexx_webview::WrySurface;

use super::toast::ToastCenter;
use crate::shell::AppShell;

pub(super) type Shell = AppShell<WrySurface, SystemBrowser, ToastCenter>;

/// Top-level application state.
pub struct ConnexxApp {
    pub(super) config: ShellConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Shell around the browser surface; created on first resume
    pub(super) shell: Option<Shell>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Last title pushed to the window, to skip redundant updates
    pub(super) last_title: String,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl ConnexxApp {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            window: None,
            shell: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            last_title: String::new(),
            should_exit: false,
        }
    }
}
