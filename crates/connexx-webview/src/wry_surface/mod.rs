//! `wry`-backed browser surface.
//!
//! `WrySurface` owns a single child `wry::WebView` and its `WebContext`.
//! Engine callbacks push [`SurfaceEvent`]s into a shared queue; the host
//! drains them on its own thread.

use std::sync::{Arc, Mutex, PoisonError};

use crate::capabilities::Capabilities;
use crate::events::SurfaceEvent;
use crate::history::NavigationHistory;

pub mod handlers;
mod lifecycle;

/// Queue shared between engine callbacks and the surface owner.
pub(crate) type EventQueue = Arc<Mutex<Vec<SurfaceEvent>>>;

/// A browser surface embedded as a child of a native window.
pub struct WrySurface {
    /// Dropped first: the WebView must go before its context.
    webview: Option<wry::WebView>,
    _context: Option<wry::WebContext>,
    events: EventQueue,
    history: NavigationHistory,
    current_url: Option<String>,
    capabilities: Capabilities,
}

pub(crate) fn take_events(events: &EventQueue) -> Vec<SurfaceEvent> {
    let mut evts = events.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::take(&mut *evts)
}

pub(crate) fn push_event(events: &EventQueue, event: SurfaceEvent) {
    events
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(event);
}
