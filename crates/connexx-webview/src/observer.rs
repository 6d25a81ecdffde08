//! Observer capabilities the shell implements to follow navigations.

use crate::events::{PageLoadState, SurfaceEvent};

/// Follows the lifecycle of each navigation inside the surface.
pub trait NavigationObserver {
    fn on_start(&mut self, url: &str);
    fn on_finish(&mut self, url: &str);
    fn on_error(&mut self, url: &str, code: i32, description: &str);
}

/// Follows load progress of the current navigation.
pub trait ProgressObserver {
    fn on_progress(&mut self, percent: u8);
}

/// Route a surface event to the observer callbacks.
///
/// Returns `false` for events that are not observer concerns
/// (external handoff, new-window requests); the caller handles those.
pub fn dispatch<O>(event: &SurfaceEvent, observer: &mut O) -> bool
where
    O: NavigationObserver + ProgressObserver,
{
    match event {
        SurfaceEvent::PageLoad {
            state: PageLoadState::Started,
            url,
        } => observer.on_start(url),
        SurfaceEvent::PageLoad {
            state: PageLoadState::Finished,
            url,
        } => observer.on_finish(url),
        SurfaceEvent::Progress { percent } => observer.on_progress(*percent),
        SurfaceEvent::LoadFailed {
            url,
            code,
            description,
        } => observer.on_error(url, *code, description),
        SurfaceEvent::ExternalNavigation { .. } | SurfaceEvent::NewWindowRequested { .. } => {
            return false
        }
    }
    true
}
