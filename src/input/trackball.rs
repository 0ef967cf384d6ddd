//! Virtual trackball: the drag-to-rotation state machine.
//!
//! A drag gesture is two points: pointer-down records the start, pointer-up
//! records the end, and both are projected from normalized device
//! coordinates onto a virtual unit hemisphere in front of the screen. The
//! rotation taking the first sphere point to the second is applied to the
//! camera around its pivot.
//!
//! Gesture state machine: `Idle` (no drag recorded) -> `Dragging`
//! (pointer-down stored the start point) -> gesture complete (pointer-up
//! applied the rotation and raised the overlay flag) -> back to `Idle`
//! once the overlay timeout elapses. Expiry is evaluated lazily on read;
//! there is no background timer.

use glam::{Quat, Vec2};
use web_time::{Duration, Instant};

use crate::error::ArcballError;
use crate::math;
use crate::options::ArcballOptions;
use crate::scene::Scene;

/// How long the gesture overlay stays visible after pointer-up, in
/// milliseconds.
pub const GESTURE_OVERLAY_MS: u64 = 1500;

/// Uniform scale applied to the tracked object per wheel tick.
pub const WHEEL_SCALE_STEP: f32 = 0.1;

/// Snapshot of the rotation-gesture visualization state.
///
/// Mirrors what an on-screen overlay shader consumes: a draw flag and the
/// two gesture endpoints in NDC. The points are only meaningful while
/// `active` is true; they read as zero before the first gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOverlay {
    /// Whether the overlay should currently be drawn.
    pub active: bool,
    /// Gesture start point in NDC.
    pub prev: Vec2,
    /// Gesture end point in NDC.
    pub curr: Vec2,
}

/// Converts pointer gestures on a canvas into camera rotations.
///
/// One trackball per interactive camera. The trackball does not own the
/// scene it rotates; the controller passes the scene into the event
/// handlers, so the trackball can never outlive it.
pub struct VirtualTrackball {
    canvas_width: f32,
    canvas_height: f32,
    /// Gesture start in NDC; `None` until the first pointer-down.
    prev_pos: Option<Vec2>,
    /// Gesture end in NDC; `None` until the first pointer-up, stale from
    /// the previous gesture while a new drag is in flight.
    curr_pos: Option<Vec2>,
    /// When the last gesture completed; drives lazy overlay expiry.
    gesture_at: Option<Instant>,
    overlay_timeout: Duration,
    wheel_scale_step: f32,
}

impl VirtualTrackball {
    /// Create a trackball for a canvas of the given pixel dimensions.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite. Dimensions are validated here (and in
    /// [`resize`](Self::resize)), never per event.
    pub fn new(width: f32, height: f32) -> Result<Self, ArcballError> {
        Self::with_options(width, height, &ArcballOptions::default())
    }

    /// Create a trackball with explicit tuning options.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite.
    pub fn with_options(
        width: f32,
        height: f32,
        options: &ArcballOptions,
    ) -> Result<Self, ArcballError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            canvas_width: width,
            canvas_height: height,
            prev_pos: None,
            curr_pos: None,
            gesture_at: None,
            overlay_timeout: Duration::from_millis(options.gesture_overlay_ms),
            wheel_scale_step: options.wheel_scale_step,
        })
    }

    /// Update the canvas dimensions after a host resize.
    ///
    /// # Errors
    ///
    /// [`ArcballError::InvalidCanvasDimensions`] when either dimension is
    /// non-positive or non-finite; the previous dimensions are kept.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ArcballError> {
        validate_dimensions(width, height)?;
        self.canvas_width = width;
        self.canvas_height = height;
        Ok(())
    }

    /// Map pixel coordinates (origin top-left) to NDC in
    /// `[-1, 1] x [-1, 1]` with Y flipped so screen-down becomes NDC-up.
    ///
    /// The four canvas corners map exactly to the four NDC corners and the
    /// canvas center to the origin.
    #[must_use]
    pub fn convert_to_ndc(&self, screen_pos: Vec2) -> Vec2 {
        let half_width = self.canvas_width / 2.0;
        let half_height = self.canvas_height / 2.0;
        Vec2::new(
            screen_pos.x / half_width - 1.0,
            1.0 - screen_pos.y / half_height,
        )
    }

    /// Record the start of a drag gesture and clear the overlay flag.
    pub fn on_pointer_down(&mut self, screen_pos: Vec2) {
        self.prev_pos = Some(self.convert_to_ndc(screen_pos));
        self.gesture_at = None;
    }

    /// Complete a drag gesture: record the end point, raise the overlay
    /// flag, and apply the induced rotation to the scene's camera.
    ///
    /// # Errors
    ///
    /// Propagates [`ArcballError::DegenerateCameraBasis`] from the camera
    /// when the rotation would line the eye up vertically with the target.
    /// The gesture state (end point, overlay flag) is recorded regardless.
    pub fn on_pointer_up(
        &mut self,
        screen_pos: Vec2,
        scene: &mut Scene,
    ) -> Result<(), ArcballError> {
        self.curr_pos = Some(self.convert_to_ndc(screen_pos));
        self.gesture_at = Some(Instant::now());

        let rotation = self.compute_rotation();
        scene.rotate_camera(rotation)
    }

    /// Apply one wheel tick as a uniform scale step on the tracked object.
    ///
    /// Positive `delta_y` (scrolling away) scales down, negative scales up.
    pub fn on_wheel(&self, delta_y: f32, scene: &mut Scene) {
        let factor = if delta_y > 0.0 {
            1.0 - self.wheel_scale_step
        } else {
            1.0 + self.wheel_scale_step
        };
        scene.uniform_scale(factor);
    }

    /// Rotation induced by the recorded drag gesture.
    ///
    /// Both endpoints are projected onto the unit hemisphere (clamped at
    /// the equator for points slightly outside the unit disc) and
    /// normalized. The rotation axis is `p0 x p1`; the angle is
    /// `asin(|p0 x p1|)`, which for unit vectors is the sine of the angle
    /// between them. That formula underestimates drags beyond ~90 degrees
    /// and is kept deliberately as the established gesture feel; it is an
    /// approximation, not a bug fix candidate.
    ///
    /// Returns the identity rotation when no full gesture has been
    /// recorded, when the endpoints coincide, or when any intermediate
    /// vector degenerates.
    #[must_use]
    pub fn compute_rotation(&self) -> Quat {
        let (Some(prev), Some(curr)) = (self.prev_pos, self.curr_pos) else {
            return Quat::IDENTITY;
        };

        let (Ok(p0), Ok(p1)) = (
            math::try_normalize(math::project_to_sphere(prev)),
            math::try_normalize(math::project_to_sphere(curr)),
        ) else {
            return Quat::IDENTITY;
        };

        let axis = p0.cross(p1);
        // For unit p0 and p1, |p0 x p1| = sin(angle between them). Clamp
        // into asin's domain; rounding can push it past 1.
        let sin_theta = axis.length().min(1.0);
        let theta = sin_theta.asin();

        match math::rotation_from_axis_angle(axis, theta) {
            Ok(rotation) => {
                log::debug!(
                    "gesture rotation: axis {axis}, angle {theta} rad"
                );
                rotation
            }
            // Coinciding (or antipodal) endpoints; nothing to rotate.
            Err(_) => Quat::IDENTITY,
        }
    }

    /// Whether the gesture overlay is currently visible.
    ///
    /// True from pointer-up until [`GESTURE_OVERLAY_MS`] milliseconds (or
    /// the configured override) have elapsed, evaluated against the wall
    /// clock at read time.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture_at
            .is_some_and(|at| at.elapsed() <= self.overlay_timeout)
    }

    /// Snapshot of the overlay state for the host's gesture visualization.
    #[must_use]
    pub fn overlay(&self) -> GestureOverlay {
        GestureOverlay {
            active: self.gesture_active(),
            prev: self.prev_pos.unwrap_or(Vec2::ZERO),
            curr: self.curr_pos.unwrap_or(Vec2::ZERO),
        }
    }

    /// Gesture start point in NDC, if one has been recorded.
    #[must_use]
    pub const fn prev_pos(&self) -> Option<Vec2> {
        self.prev_pos
    }

    /// Gesture end point in NDC, if one has been recorded.
    #[must_use]
    pub const fn curr_pos(&self) -> Option<Vec2> {
        self.curr_pos
    }

    /// Canvas dimensions in pixels, `(width, height)`.
    #[must_use]
    pub const fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }

    #[cfg(test)]
    pub(crate) fn backdate_gesture(&mut self, by: Duration) {
        self.gesture_at = self
            .gesture_at
            .and_then(|at| at.checked_sub(by));
    }
}

fn validate_dimensions(width: f32, height: f32) -> Result<(), ArcballError> {
    if width <= 0.0
        || height <= 0.0
        || !width.is_finite()
        || !height.is_finite()
    {
        return Err(ArcballError::InvalidCanvasDimensions { width, height });
    }
    Ok(())
}
