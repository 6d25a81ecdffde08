//! The application shell.
//!
//! `AppShell` owns the single browser surface and reacts to three kinds of
//! input: host lifecycle signals, host back input, and events drained from
//! the surface. It is generic over its collaborators so the same state
//! machines run under the winit host and under test fakes.

mod core;
mod lifecycle;
mod navigation;
mod progress;

#[cfg(test)]
mod tests;

pub use core::AppShell;
pub use lifecycle::LifecycleState;
pub use progress::ProgressIndicator;

/// Toast shown at launch when no network interface is connected.
pub const CONNECTIVITY_MESSAGE: &str = "No internet connection. Check your network and try again.";

/// Prefix of the toast shown when a navigation fails.
pub const LOAD_FAILED_PREFIX: &str = "Failed to load: ";
