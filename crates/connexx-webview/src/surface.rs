//! The browser surface abstraction the shell drives.

use connexx_common::SurfaceError;

use crate::capabilities::Capabilities;
use crate::events::SurfaceEvent;

/// An embedded browser view.
///
/// Engine callbacks are queued as [`SurfaceEvent`]s and handed to the
/// shell through [`drain_events`](BrowserSurface::drain_events), so every
/// shell reaction runs on the thread that owns the surface.
pub trait BrowserSurface {
    /// Start navigating to `url`. Outbound links clicked later are routed
    /// through the navigation interceptor the surface was built with.
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    /// Whether the surface has a previous page to return to.
    fn can_go_back(&self) -> bool;

    /// Return to the previous page. A no-op when `can_go_back` is false.
    fn go_back(&mut self);

    /// Suspend timers, media and rendering.
    fn pause(&mut self);

    /// Undo a previous `pause`.
    fn resume(&mut self);

    /// Release engine resources. Calling it more than once is harmless.
    fn destroy(&mut self);

    /// Take all events queued since the last call.
    fn drain_events(&mut self) -> Vec<SurfaceEvent>;

    /// URL of the page currently committed, if any.
    fn current_url(&self) -> Option<String>;

    /// Capabilities fixed when the surface was built.
    fn capabilities(&self) -> &Capabilities;
}
