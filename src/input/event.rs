//! Platform-agnostic input events.
//!
//! The host window layer (DOM listeners, winit, tests) translates its raw
//! events into these variants and feeds them to
//! [`ArcballController::handle_event`](crate::ArcballController::handle_event).
//! Coordinates are physical pixels relative to the canvas, origin top-left.

/// A raw pointer or wheel event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed at a canvas position.
    PointerDown {
        /// Horizontal position in pixels from the canvas left edge.
        x: f32,
        /// Vertical position in pixels from the canvas top edge.
        y: f32,
    },
    /// Primary pointer released at a canvas position.
    PointerUp {
        /// Horizontal position in pixels from the canvas left edge.
        x: f32,
        /// Vertical position in pixels from the canvas top edge.
        y: f32,
    },
    /// Scroll wheel tick.
    ///
    /// Only the sign matters: positive `delta_y` (scrolling away) scales
    /// the tracked object down, negative scales it up.
    Wheel {
        /// Raw wheel delta; browser `deltaY` convention.
        delta_y: f32,
    },
}
