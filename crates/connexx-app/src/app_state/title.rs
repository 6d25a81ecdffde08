//! Window title management: shows load progress and the current toast.

use crate::shell::ProgressIndicator;

use super::core::ConnexxApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Format: "{title} — {percent}% — {toast}", omitting the parts not active.
pub(super) fn compose_title(base: &str, progress: &ProgressIndicator, toast: Option<&str>) -> String {
    let mut title = base.to_string();
    if progress.is_visible() {
        title.push_str(&format!(" — {}%", progress.percent()));
    }
    if let Some(message) = toast {
        title.push_str(" — ");
        title.push_str(message);
    }
    title
}

impl ConnexxApp {
    /// Update the window title to reflect progress and toasts.
    pub(super) fn update_window_title(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let Some(ref mut shell) = self.shell else {
            return;
        };

        let progress = *shell.progress();
        let toast = shell.notifier_mut().current_message();
        let title = compose_title(&self.config.window.title, &progress, toast.as_deref());

        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
