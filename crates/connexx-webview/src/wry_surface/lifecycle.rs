use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use connexx_common::SurfaceError;
use tracing::{debug, info, warn};
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use crate::capabilities::Capabilities;
use crate::events::{PageLoadState, SurfaceEvent};
use crate::history::NavigationHistory;
use crate::ipc::{csp_init_script, HISTORY_BACK_SCRIPT, PROGRESS_INIT_SCRIPT};
use crate::policy::NavigationInterceptor;
use crate::surface::BrowserSurface;

use super::{handlers, take_events, WrySurface};

impl WrySurface {
    /// Create the WebView as a child of `window`, positioned at `bounds`.
    ///
    /// `capabilities` are applied here and cannot be changed later. When
    /// `data_dir` is given and the capabilities ask for persistent storage,
    /// cookies and web storage live there across launches.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        capabilities: Capabilities,
        interceptor: Arc<dyn NavigationInterceptor>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, SurfaceError> {
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut context = if capabilities.incognito() {
            None
        } else {
            Some(WebContext::new(data_dir))
        };

        let mut builder = match context.as_mut() {
            Some(ctx) => WebViewBuilder::with_web_context(ctx),
            None => WebViewBuilder::new(),
        };

        builder = builder
            .with_bounds(bounds)
            .with_incognito(capabilities.incognito())
            .with_hotkeys_zoom(capabilities.zoom_controls)
            .with_devtools(cfg!(debug_assertions))
            .with_focused(true);

        if capabilities.script_execution {
            builder = builder.with_initialization_script(PROGRESS_INIT_SCRIPT);
        } else {
            builder = builder.with_javascript_disabled();
        }

        if let Some(csp) = capabilities.content_security_policy() {
            builder = builder.with_initialization_script(&csp_init_script(csp));
        }

        builder = handlers::attach_ipc_handler(builder, Arc::clone(&events));
        builder = handlers::attach_page_load_handler(builder, Arc::clone(&events));
        builder = handlers::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            Arc::clone(&interceptor),
        );
        builder = handlers::attach_new_window_handler(builder, Arc::clone(&events), interceptor);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Creation(e.to_string()))?;

        debug!(?capabilities, "WebView created");

        Ok(Self {
            webview: Some(webview),
            _context: context,
            events,
            history: NavigationHistory::new(),
            current_url: None,
            capabilities,
        })
    }

    /// Reposition the WebView within its parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_bounds(bounds) {
                warn!(error = %e, "failed to set WebView bounds");
            }
        }
    }

    fn run_script(&self, js: &str) -> Result<(), SurfaceError> {
        let webview = self
            .webview
            .as_ref()
            .ok_or_else(|| SurfaceError::Script("surface destroyed".to_string()))?;
        webview
            .evaluate_script(js)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }

    fn set_visible(&self, visible: bool) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_visible(visible) {
                warn!(visible, error = %e, "failed to change WebView visibility");
            }
        }
    }
}

impl BrowserSurface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        let webview = self.webview.as_ref().ok_or_else(|| SurfaceError::Load {
            url: url.to_string(),
            reason: "surface destroyed".to_string(),
        })?;
        webview.load_url(url).map_err(|e| SurfaceError::Load {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        debug!(url = %url, "load requested");
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.webview.is_some() && self.history.can_go_back()
    }

    fn go_back(&mut self) {
        if self.webview.is_none() || !self.history.go_back() {
            return;
        }
        if let Err(e) = self.run_script(HISTORY_BACK_SCRIPT) {
            warn!(error = %e, "history.back() failed");
        }
    }

    fn pause(&mut self) {
        self.set_visible(false);
    }

    fn resume(&mut self) {
        self.set_visible(true);
    }

    fn destroy(&mut self) {
        if self.webview.take().is_some() {
            self.history = NavigationHistory::new();
            info!("WebView destroyed");
        }
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        let events = take_events(&self.events);
        for event in &events {
            if let SurfaceEvent::PageLoad { state, url } = event {
                if *state == PageLoadState::Started {
                    self.history.record_start(url);
                }
                self.current_url = Some(url.clone());
            }
        }
        events
    }

    fn current_url(&self) -> Option<String> {
        self.current_url.clone()
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}
