//! Window creation and shell setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use connexx_platform::{SystemBrowser, SystemConnectivity};
use connexx_webview::{NavigationInterceptor, NavigationPolicy, WrySurface};

use super::bounds::window_bounds;
use super::core::ConnexxApp;
use super::toast::ToastCenter;
use crate::shell::AppShell;

impl ConnexxApp {
    /// Create the window and the shell around it.
    /// Returns `false` if the window could not be created and the event loop should exit.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(200.0, 200.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let policy = NavigationPolicy::new(&self.config.navigation.external_domains);
        tracing::info!(domains = ?policy.external_domains(), "External navigation policy");
        let interceptor: Arc<dyn NavigationInterceptor> = Arc::new(policy);

        let data_dir = match connexx_platform::webview_data_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("No persistent WebView storage: {e}");
                None
            }
        };

        let notifier = ToastCenter::new(
            self.config.window.title.clone(),
            self.config.notifications.native,
        );
        let bounds = window_bounds(&window);
        let target = self.config.app.target_url().to_string();

        let shell = AppShell::create(
            &target,
            interceptor,
            SystemBrowser,
            notifier,
            &SystemConnectivity,
            |capabilities, interceptor| {
                WrySurface::build(
                    &*window,
                    bounds,
                    capabilities.clone(),
                    interceptor,
                    data_dir,
                )
            },
        );

        self.window = Some(window);
        self.shell = Some(shell);
        tracing::info!(url = %target, "Window created and shell initialized");
        true
    }
}
