use connexx_common::{Notification, PlatformError};
use tracing::info;

/// Sink for the shell's toast notifications.
///
/// Implementations must not block: a toast is shown and dismissed on its
/// own while the shell keeps running.
pub trait Notifier {
    fn show(&mut self, notification: Notification);
}

/// Sends a native notification to the user.
///
/// - macOS: Uses `osascript` to display a native notification.
/// - Other platforms: Logs the notification.
pub fn notify(title: &str, body: &str) -> Result<(), PlatformError> {
    platform_notify(title, body)
}

#[cfg(target_os = "macos")]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    let escaped_title = escape_applescript(title);
    let escaped_body = escape_applescript(body);

    let script = format!("display notification \"{escaped_body}\" with title \"{escaped_title}\"");

    // Spawned, not awaited: the toast contract is non-blocking.
    std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .spawn()
        .map_err(|e| PlatformError::NotificationError(format!("failed to run osascript: {e}")))?;

    info!("native notification sent");
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    info!(title, body, "notification");
    Ok(())
}

#[cfg(any(target_os = "macos", test))]
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
