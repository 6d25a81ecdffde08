//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Maps window and input events onto the shell's lifecycle,
//! back handling and event pump.

mod bounds;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;
mod toast;

pub use core::ConnexxApp;
