//! Camera: view-matrix construction and pivot-relative rotation.
//!
//! The camera owns its position, look target, pivot, up hint, and the
//! derived view matrix. The matrix is only ever replaced wholesale by
//! [`Camera::look_at`], [`Camera::rotate_around_pivot`], or
//! [`Camera::move_to`], so a per-frame reader always observes either the
//! pre-gesture or the fully-post-gesture state.

/// Core camera struct: look-at, pivot rotation, translation.
pub mod core;
/// GPU uniform block for the host renderer.
pub mod uniform;

pub use core::Camera;
pub use uniform::CameraUniform;
