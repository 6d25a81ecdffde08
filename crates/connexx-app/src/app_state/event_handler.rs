//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowId;

use super::core::ConnexxApp;

impl ApplicationHandler for ConnexxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_none() && !self.initialize(event_loop) {
            event_loop.exit();
            return;
        }

        if let Some(ref mut shell) = self.shell {
            shell.resume();
        }
        self.update_window_title();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref mut shell) = self.shell {
            shell.pause();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_surface_bounds();
                }
            }

            WindowEvent::Occluded(occluded) => {
                if let Some(ref mut shell) = self.shell {
                    if occluded {
                        shell.pause();
                    } else {
                        shell.resume();
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Back,
                ..
            } => {
                self.handle_back_input(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ConnexxApp {
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if is_back_key(&event.logical_key, self.modifiers) {
            self.handle_back_input(event_loop);
        }
    }

    /// Offer a back input to the shell; if it is not consumed, apply the
    /// host default of closing the window.
    fn handle_back_input(&mut self, event_loop: &ActiveEventLoop) {
        let consumed = self
            .shell
            .as_mut()
            .is_some_and(|shell| shell.handle_back());
        if consumed || !self.config.window.exit_on_back {
            return;
        }
        tracing::info!("Back input not consumed; closing");
        self.shutdown();
        event_loop.exit();
    }
}

/// Keys treated as the platform back input.
fn is_back_key(key: &Key, modifiers: ModifiersState) -> bool {
    match key {
        Key::Named(NamedKey::GoBack | NamedKey::BrowserBack) => true,
        Key::Named(NamedKey::ArrowLeft) => modifiers.alt_key(),
        _ => false,
    }
}
