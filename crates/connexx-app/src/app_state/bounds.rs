//! Keeps the browser surface filling the window.

use winit::window::Window;

use connexx_webview::BrowserSurface;

use super::core::ConnexxApp;

/// Bounds covering the whole client area of `window`, in logical pixels.
pub(super) fn window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    fill_rect(size.width, size.height)
}

/// A wry `Rect` anchored at the origin with the given logical size.
pub(super) fn fill_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

impl ConnexxApp {
    pub(super) fn sync_surface_bounds(&self) {
        let (Some(window), Some(shell)) = (&self.window, &self.shell) else {
            return;
        };
        if let Some(surface) = shell.surface() {
            surface.set_bounds(window_bounds(window));
            tracing::debug!(url = ?surface.current_url(), "surface bounds synced");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_is_anchored_at_origin() {
        let rect = fill_rect(420.0, 860.0);

        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 420.0).abs() < f64::EPSILON);
                assert!((size.height - 860.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
