//! Embedded browser surface for the Connexx shell.
//!
//! Wraps the `wry` crate to provide:
//! - A single child WebView with a fixed capability set
//! - Navigation routing between the surface and the system browser
//! - Load lifecycle and progress events, drained by the host
//! - Back-stack tracking for hardware/gesture back

pub mod capabilities;
pub mod events;
pub mod history;
pub mod ipc;
pub mod observer;
pub mod policy;
pub mod surface;
pub mod wry_surface;

pub use capabilities::{CachePolicy, Capabilities, MixedContentPolicy};
pub use events::{PageLoadState, SurfaceEvent, ERROR_UNKNOWN};
pub use history::NavigationHistory;
pub use ipc::IpcMessage;
pub use observer::{dispatch, NavigationObserver, ProgressObserver};
pub use policy::{NavigationDecision, NavigationInterceptor, NavigationPolicy};
pub use surface::BrowserSurface;
pub use wry_surface::WrySurface;
