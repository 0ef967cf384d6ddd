//! The controller owning the scene and its trackball.
//!
//! This is the single integration point for a host render loop: raw window
//! events go in through [`ArcballController::handle_event`], the frame
//! clock advances through [`tick`](ArcballController::tick), and per-frame
//! outputs (view matrix, camera position, model matrix, gesture overlay)
//! come out through read-only accessors.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::{Camera, CameraUniform};
use crate::error::ArcballError;
use crate::input::{GestureOverlay, InputEvent, VirtualTrackball};
use crate::options::ArcballOptions;
use crate::scene::Scene;

/// Owns one [`Scene`] and the [`VirtualTrackball`] that rotates its camera.
pub struct ArcballController {
    scene: Scene,
    trackball: VirtualTrackball,
}

impl ArcballController {
    /// Create a controller around `camera` for a canvas of the given pixel
    /// dimensions.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite.
    pub fn new(
        camera: Camera,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<Self, ArcballError> {
        Self::with_options(
            camera,
            canvas_width,
            canvas_height,
            &ArcballOptions::default(),
        )
    }

    /// Create a controller with explicit tuning options.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite.
    pub fn with_options(
        camera: Camera,
        canvas_width: f32,
        canvas_height: f32,
        options: &ArcballOptions,
    ) -> Result<Self, ArcballError> {
        let trackball =
            VirtualTrackball::with_options(canvas_width, canvas_height, options)?;
        Ok(Self {
            scene: Scene::with_spin_rate(camera, options.spin_rate),
            trackball,
        })
    }

    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the controller dispatches to the
    /// trackball's gesture handlers and the scene's wheel scaling. Events
    /// are processed synchronously and atomically with respect to the
    /// render loop; nothing here suspends.
    ///
    /// # Errors
    ///
    /// A pointer-up whose rotation would leave the camera in a degenerate
    /// basis propagates [`ArcballError::DegenerateCameraBasis`]; the
    /// camera keeps its previous orientation.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), ArcballError> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.trackball.on_pointer_down(Vec2::new(x, y));
                Ok(())
            }
            InputEvent::PointerUp { x, y } => self
                .trackball
                .on_pointer_up(Vec2::new(x, y), &mut self.scene),
            InputEvent::Wheel { delta_y } => {
                self.trackball.on_wheel(delta_y, &mut self.scene);
                Ok(())
            }
        }
    }

    /// Advance per-frame animation state by `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32) {
        self.scene.tick(delta_time);
    }

    /// Update the canvas dimensions after a host resize.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ArcballError> {
        self.trackball.resize(width, height)
    }

    /// Flip the tracked object's auto-spin flag.
    pub fn toggle_rotation(&mut self) {
        self.scene.toggle_rotation();
    }

    // -- Per-frame outputs -------------------------------------------------

    /// Current world-to-camera view matrix, ready to feed a uniform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.scene.camera().view_matrix()
    }

    /// Camera world-space position (for debug display).
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.scene.camera().position()
    }

    /// Camera look-at target (for debug display).
    #[must_use]
    pub fn camera_target(&self) -> Vec3 {
        self.scene.camera().target()
    }

    /// Model matrix of the tracked object (spin and uniform scale).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.scene.model_matrix()
    }

    /// GPU-ready uniform block for the current camera state.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view(self.scene.camera());
        uniform
    }

    /// Snapshot of the rotation-gesture overlay state.
    #[must_use]
    pub fn overlay(&self) -> GestureOverlay {
        self.trackball.overlay()
    }

    /// The owned scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the owned scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The owned trackball.
    #[must_use]
    pub const fn trackball(&self) -> &VirtualTrackball {
        &self.trackball
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::ArcballController;
    use crate::camera::Camera;
    use crate::input::InputEvent;

    const EPSILON: f32 = 1e-5;

    fn test_controller() -> ArcballController {
        let camera = Camera::new(
            Vec3::new(10.0, 10.0, -10.0),
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        ArcballController::new(camera, 800.0, 600.0).unwrap()
    }

    #[test]
    fn full_gesture_through_the_event_surface() {
        let mut controller = test_controller();
        let view_before = controller.view_matrix();
        let distance_before = controller.camera_position().length();

        controller
            .handle_event(InputEvent::PointerDown { x: 400.0, y: 300.0 })
            .unwrap();
        assert_eq!(controller.view_matrix(), view_before);

        controller
            .handle_event(InputEvent::PointerUp { x: 600.0, y: 300.0 })
            .unwrap();
        assert_ne!(controller.view_matrix(), view_before);
        assert!(controller.overlay().active);

        let distance_after = controller.camera_position().length();
        assert!(
            (distance_after - distance_before).abs() / distance_before < 1e-5
        );
    }

    #[test]
    fn wheel_events_scale_the_tracked_object() {
        let mut controller = test_controller();
        controller
            .handle_event(InputEvent::Wheel { delta_y: -1.0 })
            .unwrap();
        assert!((controller.scene().object_scale() - 1.1).abs() < EPSILON);
    }

    #[test]
    fn uniform_block_matches_frame_outputs() {
        let controller = test_controller();
        let uniform = controller.camera_uniform();
        assert_eq!(
            uniform.view,
            controller.view_matrix().to_cols_array_2d()
        );
        assert_eq!(
            uniform.position,
            controller.camera_position().to_array()
        );
    }

    #[test]
    fn tick_spins_only_after_toggle() {
        let mut controller = test_controller();
        controller.tick(1.0);
        assert_eq!(controller.model_matrix(), Mat4::IDENTITY);

        controller.toggle_rotation();
        controller.tick(1.0);
        assert_ne!(controller.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn resize_validates_like_construction() {
        let mut controller = test_controller();
        assert!(controller.resize(0.0, 600.0).is_err());
        assert!(controller.resize(640.0, 480.0).is_ok());
    }
}
