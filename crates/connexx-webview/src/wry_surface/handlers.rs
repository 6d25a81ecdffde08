use std::sync::Arc;

use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceEvent};
use crate::ipc::IpcMessage;
use crate::policy::{NavigationDecision, NavigationInterceptor};

use super::{push_event, EventQueue};

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        on_ipc_message(&events, request.body());
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        push_event(&events, SurfaceEvent::PageLoad { state, url });
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
    interceptor: Arc<dyn NavigationInterceptor>,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| on_navigation(interceptor.as_ref(), &events, url))
}

pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventQueue,
    interceptor: Arc<dyn NavigationInterceptor>,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        on_new_window(interceptor.as_ref(), &events, url)
    })
}

// =============================================================================
// DECISIONS
// =============================================================================

/// Returns whether the engine may proceed with the navigation.
fn on_navigation(interceptor: &dyn NavigationInterceptor, events: &EventQueue, url: String) -> bool {
    match interceptor.intercept(&url) {
        NavigationDecision::LoadInSurface => {
            debug!(url = %url, "navigation allowed");
            true
        }
        NavigationDecision::OpenExternally => {
            info!(url = %url, "navigation handed to system browser");
            push_event(events, SurfaceEvent::ExternalNavigation { url });
            false
        }
    }
}

/// New windows are never created; the target is either handed off or
/// loaded in place by the shell.
fn on_new_window(interceptor: &dyn NavigationInterceptor, events: &EventQueue, url: String) -> bool {
    let event = match interceptor.intercept(&url) {
        NavigationDecision::OpenExternally => {
            info!(url = %url, "new window handed to system browser");
            SurfaceEvent::ExternalNavigation { url }
        }
        NavigationDecision::LoadInSurface => {
            debug!(url = %url, "new window redirected into surface");
            SurfaceEvent::NewWindowRequested { url }
        }
    };
    push_event(events, event);
    false
}

fn on_ipc_message(events: &EventQueue, body: &str) {
    let Some(msg) = IpcMessage::from_json(body) else {
        warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
        return;
    };
    match msg.progress() {
        Some(percent) => push_event(events, SurfaceEvent::Progress { percent }),
        None => debug!(kind = %msg.kind, "IPC message ignored"),
    }
}

// =============================================================================
// TESTS
// =============================================================================
