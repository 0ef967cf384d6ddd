//! Input handling: platform-agnostic events and the virtual trackball
//! state machine that turns drag gestures into camera rotations.

/// Platform-agnostic input events.
pub mod event;
/// Drag-to-rotation state machine.
pub mod trackball;

pub use event::InputEvent;
pub use trackball::{GestureOverlay, VirtualTrackball};
