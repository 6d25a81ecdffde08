//! Graceful shutdown: destroy the browser surface.

use super::core::ConnexxApp;

impl ConnexxApp {
    /// Tear down the shell. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut shell) = self.shell {
            shell.destroy();
        }
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
