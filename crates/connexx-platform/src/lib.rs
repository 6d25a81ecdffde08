//! Host-platform collaborators of the shell.
//!
//! Everything here is a thin capability the shell consumes: a
//! connectivity query, the system browser, native notifications, and
//! platform directories. Each capability the shell core depends on is a
//! trait so the core can be driven by fakes in tests.

pub mod connectivity;
pub mod external;
pub mod notifications;
pub mod paths;

pub use connectivity::{ConnectivityProbe, SystemConnectivity};
pub use external::{ExternalOpener, SystemBrowser};
pub use notifications::{notify, Notifier};
pub use paths::{config_dir, data_dir, ensure_dirs, webview_data_dir};
