// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arcball camera control core.
//!
//! Converts raw 2D pointer input (pointer-down / pointer-up screen
//! coordinates) into a 3D rotation of a viewpoint around a pivot, and
//! produces a view matrix ready to feed a rendering pipeline. The crate is
//! purely in-memory and renderer-agnostic: the host supplies canvas
//! dimensions and raw input events, and reads back the view matrix, camera
//! position, and gesture-overlay data once per frame.
//!
//! # Key entry points
//!
//! - [`ArcballController`] - owns the scene and trackball, routes input
//! - [`input::VirtualTrackball`] - the drag-to-rotation state machine
//! - [`camera::Camera`] - view matrix, look-at, and pivot rotation
//! - [`options::ArcballOptions`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Pointer and wheel events arrive as platform-agnostic
//! [`InputEvent`](input::InputEvent) values and are processed synchronously:
//! pointer-down records the gesture start point in NDC, pointer-up records
//! the end point, projects both onto a virtual unit hemisphere, and applies
//! the induced rotation to the camera around its pivot. The host render
//! loop calls [`ArcballController::tick`] once per frame and reads the
//! current view matrix; no operation here suspends or spawns threads.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod scene;

pub use camera::{Camera, CameraUniform};
pub use controller::ArcballController;
pub use error::ArcballError;
pub use input::{GestureOverlay, InputEvent, VirtualTrackball};
pub use options::ArcballOptions;
pub use scene::Scene;
