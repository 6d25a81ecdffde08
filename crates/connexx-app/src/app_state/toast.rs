//! Toast delivery: an in-window queue plus optional native notifications.

use connexx_common::{Notification, NotificationQueue};
use connexx_platform::Notifier;

/// Notifier used by the running app.
///
/// Every toast is queued for display in the window chrome until it
/// expires. When native notifications are enabled it is also raised
/// through the OS.
pub struct ToastCenter {
    queue: NotificationQueue,
    app_name: String,
    native: bool,
}

impl ToastCenter {
    pub fn new(app_name: String, native: bool) -> Self {
        Self {
            queue: NotificationQueue::default(),
            app_name,
            native,
        }
    }

    /// Message of the newest toast that has not expired.
    pub fn current_message(&mut self) -> Option<String> {
        self.queue.latest().map(|n| n.message.clone())
    }
}

impl Notifier for ToastCenter {
    fn show(&mut self, notification: Notification) {
        tracing::info!(level = ?notification.level, message = %notification.message, "toast");
        if self.native {
            if let Err(e) = connexx_platform::notify(&self.app_name, &notification.message) {
                tracing::warn!("Native notification failed: {e}");
            }
        }
        self.queue.push(notification);
    }
}
