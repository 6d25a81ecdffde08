//! Surface event polling.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use crate::shell::LifecycleState;

use super::core::ConnexxApp;

/// How often queued surface events are drained while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl ConnexxApp {
    /// Drain surface events, refresh the title and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(ref mut shell) = self.shell {
            if shell.lifecycle() != LifecycleState::Destroyed {
                shell.pump();
            }
        }
        self.update_window_title();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
