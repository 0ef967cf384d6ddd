//! Thin scene aggregator: one camera plus per-object transform state.
//!
//! The scene exists because the trackball and the camera need a shared
//! owner: rotation gestures go to the camera, wheel scaling and the
//! auto-spin toggle go to the tracked object. The host render loop drives
//! [`Scene::tick`] once per frame and reads the model matrix alongside the
//! camera's view matrix.

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};

use crate::camera::Camera;
use crate::error::ArcballError;

/// Default auto-spin rate in radians per second.
pub const DEFAULT_SPIN_RATE: f32 = 1.0;

/// Owns the camera and the tracked object's transform state.
pub struct Scene {
    camera: Camera,
    /// Multiplicative uniform-scale accumulator driven by the wheel.
    object_scale: f32,
    /// Whether the tracked object auto-spins each frame.
    spin_enabled: bool,
    /// Accumulated spin angle in radians, wrapped to one turn.
    spin_angle: f32,
    /// Spin advance per second of frame time, radians.
    spin_rate: f32,
}

impl Scene {
    /// Create a scene around an existing camera, spin disabled.
    #[must_use]
    pub const fn new(camera: Camera) -> Self {
        Self::with_spin_rate(camera, DEFAULT_SPIN_RATE)
    }

    /// Create a scene with a custom auto-spin rate (radians per second).
    #[must_use]
    pub const fn with_spin_rate(camera: Camera, spin_rate: f32) -> Self {
        Self {
            camera,
            object_scale: 1.0,
            spin_enabled: false,
            spin_angle: 0.0,
            spin_rate,
        }
    }

    /// The owned camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the owned camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Forward a gesture rotation to the camera's pivot orbit.
    ///
    /// # Errors
    ///
    /// Propagates [`ArcballError::DegenerateCameraBasis`] when the rotation
    /// would line the eye up vertically with the target.
    pub fn rotate_camera(&mut self, rotation: Quat) -> Result<(), ArcballError> {
        self.camera.rotate_around_pivot(rotation)
    }

    /// Flip the auto-spin flag consumed by [`tick`](Self::tick).
    pub fn toggle_rotation(&mut self) {
        self.spin_enabled = !self.spin_enabled;
        log::debug!("auto-spin {}", if self.spin_enabled { "on" } else { "off" });
    }

    /// Whether the tracked object is currently auto-spinning.
    #[must_use]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    /// Apply a multiplicative uniform scale step to the tracked object.
    pub fn uniform_scale(&mut self, factor: f32) {
        self.object_scale *= factor;
        log::trace!("object scale now {}", self.object_scale);
    }

    /// Current accumulated uniform scale of the tracked object.
    #[must_use]
    pub const fn object_scale(&self) -> f32 {
        self.object_scale
    }

    /// Advance per-frame animation state by `delta_time` seconds.
    ///
    /// Only the auto-spin angle integrates over time; gesture-overlay
    /// expiry is evaluated lazily on read and needs no ticking.
    pub fn tick(&mut self, delta_time: f32) {
        if self.spin_enabled {
            self.spin_angle = (self.spin_angle + self.spin_rate * delta_time)
                .rem_euclid(TAU);
        }
    }

    /// Model matrix of the tracked object: spin rotation times uniform
    /// scale.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin_angle)
            * Mat4::from_scale(Vec3::splat(self.object_scale))
    }
}
