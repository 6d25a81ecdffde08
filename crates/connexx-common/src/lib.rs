//! Types shared by every crate in the shell: the error taxonomy and
//! the toast notification model.

pub mod errors;
pub mod notifications;

pub use errors::{ConfigError, PlatformError, SurfaceError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue, ToastDuration};
