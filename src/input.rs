//! Pointer tracking for the interaction model.
//!
//! The orb only needs one thing from the input layer: the pointer position in
//! normalized device coordinates, reset to the origin when the cursor leaves
//! the window so the repulsion relaxes instead of sticking to the last
//! position.

use glam::Vec2;
use winit::event::WindowEvent;

/// Pointer position in NDC, fed by winit window events.
#[derive(Debug)]
pub struct Pointer {
    ndc: Vec2,
    window_size: (u32, u32),
}

impl Pointer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ndc: Vec2::ZERO,
            window_size: (width, height),
        }
    }

    /// Current pointer position in normalized device coordinates (-1 to 1).
    ///
    /// Origin at the window center, y up. `(0, 0)` while the cursor is
    /// outside the window.
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Record a cursor position in window pixels.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let (w, h) = self.window_size;
        if w > 0 && h > 0 {
            self.ndc = Vec2::new(
                (x / w as f32) * 2.0 - 1.0,
                1.0 - (y / h as f32) * 2.0, // Y flipped
            );
        }
    }

    /// Snap the pointer back to the origin (cursor left the window).
    pub fn reset(&mut self) {
        self.ndc = Vec2::ZERO;
    }

    /// Track the window size used for the NDC mapping.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_position(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.reset(),
            WindowEvent::Resized(size) => self.set_window_size(size.width, size.height),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_position(400.0, 300.0);
        assert!(pointer.ndc().length() < 1e-6);
    }

    #[test]
    fn test_corners_map_to_unit_extents() {
        let mut pointer = Pointer::new(800, 600);

        pointer.set_position(0.0, 0.0);
        assert_eq!(pointer.ndc(), Vec2::new(-1.0, 1.0));

        pointer.set_position(800.0, 600.0);
        assert_eq!(pointer.ndc(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_cursor_leave_resets_to_origin() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_position(700.0, 100.0);
        assert!(pointer.ndc().length() > 0.5);

        pointer.reset();
        assert_eq!(pointer.ndc(), Vec2::ZERO);
    }

    #[test]
    fn test_resize_changes_mapping() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_window_size(400, 400);
        pointer.set_position(200.0, 200.0);
        assert!(pointer.ndc().length() < 1e-6);
    }

    #[test]
    fn test_zero_sized_window_keeps_last_position() {
        let mut pointer = Pointer::new(0, 0);
        pointer.set_position(100.0, 100.0);
        assert_eq!(pointer.ndc(), Vec2::ZERO);
    }
}
