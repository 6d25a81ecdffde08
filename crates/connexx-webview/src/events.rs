//! Browser surface event types.

use serde::{Deserialize, Serialize};

/// Error code used when the engine does not classify a failure.
pub const ERROR_UNKNOWN: i32 = -1;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a browser surface, queued until the shell drains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Load progress of the current navigation, 0-100.
    Progress { percent: u8 },
    /// The engine gave up on a navigation.
    LoadFailed {
        url: String,
        code: i32,
        description: String,
    },
    /// A navigation was cancelled in the surface because its target must
    /// be opened in the system browser.
    ExternalNavigation { url: String },
    /// The page asked for a new window (`target=_blank`, `window.open`)
    /// to a URL that may be shown in the surface.
    NewWindowRequested { url: String },
}
