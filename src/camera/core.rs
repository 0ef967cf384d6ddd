use glam::{Mat4, Quat, Vec3, Vec4};

use crate::error::ArcballError;
use crate::math;

/// Viewpoint orbiting a pivot, exposing a world-to-camera view matrix.
///
/// The view basis follows the convention of the look-at construction: the
/// matrix rows encode (right, up', forward) with forward pointing from the
/// eye *toward* the target, and the translation column is the basis applied
/// to `-position`. Transforming a world-space point by
/// [`view_matrix`](Self::view_matrix) yields camera space.
pub struct Camera {
    /// Eye position in world space.
    position: Vec3,
    /// Look-at target position.
    target: Vec3,
    /// Fixed point the camera orbits during rotation gestures.
    pivot: Vec3,
    /// Up hint used to derive the camera basis.
    up: Vec3,
    /// Derived world-to-camera transform.
    view_matrix: Mat4,
}

impl Camera {
    /// Create a camera at `eye` looking at `target`, orbiting `pivot`.
    ///
    /// # Errors
    ///
    /// [`ArcballError::DegenerateCameraBasis`] when the eye-to-target
    /// direction is parallel to `up`, [`ArcballError::DegenerateVector`]
    /// when `eye == target`.
    pub fn new(
        eye: Vec3,
        target: Vec3,
        pivot: Vec3,
        up: Vec3,
    ) -> Result<Self, ArcballError> {
        let mut camera = Self {
            position: eye,
            target,
            pivot,
            up,
            view_matrix: Mat4::IDENTITY,
        };
        camera.look_at(eye, target, up)?;
        Ok(camera)
    }

    /// Eye position in world space.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target position.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Pivot the camera orbits during rotation gestures.
    #[must_use]
    pub const fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Current world-to-camera view matrix (column-major).
    ///
    /// The returned matrix is a copy; all mutation goes through
    /// [`look_at`](Self::look_at), [`rotate_around_pivot`](Self::rotate_around_pivot),
    /// or [`move_to`](Self::move_to).
    #[must_use]
    pub const fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    /// Re-orient the camera: place the eye at `eye`, looking at `target`,
    /// with `up` as the roll hint.
    ///
    /// Computes forward = normalize(target - eye), right =
    /// normalize(up x forward), up' = forward x right, and replaces the view
    /// matrix in one step. The upper-left 3x3 of the result is orthonormal.
    ///
    /// # Errors
    ///
    /// [`ArcballError::DegenerateCameraBasis`] when forward is parallel to
    /// `up` (the cross product vanishes). This is surfaced rather than
    /// resolved with an arbitrary up vector, which would change camera roll
    /// unpredictably. [`ArcballError::DegenerateVector`] when `eye` and
    /// `target` coincide.
    pub fn look_at(
        &mut self,
        eye: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<(), ArcballError> {
        let forward = math::try_normalize(target - eye)?;
        let right = math::try_normalize(up.cross(forward))
            .map_err(|_| ArcballError::DegenerateCameraBasis)?;
        // Unit length already: forward and right are orthonormal.
        let new_up = forward.cross(right);

        // Rows (right, up', forward); translation column is the rotated
        // negated eye. Replaced wholesale so frame reads never see a
        // half-written matrix.
        self.view_matrix = Mat4::from_cols(
            Vec4::new(right.x, new_up.x, forward.x, 0.0),
            Vec4::new(right.y, new_up.y, forward.y, 0.0),
            Vec4::new(right.z, new_up.z, forward.z, 0.0),
            Vec4::new(
                -right.dot(eye),
                -new_up.dot(eye),
                -forward.dot(eye),
                1.0,
            ),
        );
        self.position = eye;
        self.target = target;
        self.up = up;
        Ok(())
    }

    /// Rotate the camera position around the pivot and re-orient toward the
    /// current target.
    ///
    /// The position is re-expressed relative to the pivot, rotated, and
    /// translated back; distance to the pivot is preserved exactly (up to
    /// floating-point rounding) because the rotation is applied through a
    /// unit quaternion. Callers holding a rotation matrix can convert with
    /// `Quat::from_mat4`.
    ///
    /// # Errors
    ///
    /// [`ArcballError::DegenerateCameraBasis`] when the rotated eye lines
    /// up vertically with the target; the camera state is left unchanged in
    /// that case.
    pub fn rotate_around_pivot(
        &mut self,
        rotation: Quat,
    ) -> Result<(), ArcballError> {
        let relative = self.position - self.pivot;
        let new_position = self.pivot + rotation * relative;
        log::debug!(
            "rotate_around_pivot: {} -> {}",
            self.position,
            new_position
        );
        self.look_at(new_position, self.target, self.up)
    }

    /// Translate the camera to `position` without changing orientation.
    ///
    /// Only the translation column of the view matrix is recomputed; the
    /// basis rows are left untouched.
    pub fn move_to(&mut self, position: Vec3) {
        let m = &mut self.view_matrix;
        let right = Vec3::new(m.x_axis.x, m.y_axis.x, m.z_axis.x);
        let up = Vec3::new(m.x_axis.y, m.y_axis.y, m.z_axis.y);
        let forward = Vec3::new(m.x_axis.z, m.y_axis.z, m.z_axis.z);
        m.w_axis = Vec4::new(
            -right.dot(position),
            -up.dot(position),
            -forward.dot(position),
            1.0,
        );
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use glam::{Mat4, Quat, Vec3, Vec4};
    use rand::Rng;

    use super::Camera;
    use crate::error::ArcballError;
    use crate::math;

    const EPSILON: f32 = 1e-4;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(10.0, 10.0, -10.0),
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap()
    }

    fn assert_orthonormal_basis(m: Mat4) {
        let rows = [
            Vec3::new(m.x_axis.x, m.y_axis.x, m.z_axis.x),
            Vec3::new(m.x_axis.y, m.y_axis.y, m.z_axis.y),
            Vec3::new(m.x_axis.z, m.y_axis.z, m.z_axis.z),
        ];
        for (i, row) in rows.iter().enumerate() {
            assert!(
                (row.length() - 1.0).abs() < EPSILON,
                "row {i} not unit length"
            );
        }
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            assert!(
                rows[i].dot(rows[j]).abs() < EPSILON,
                "rows {i} and {j} not perpendicular"
            );
        }
    }

    #[test]
    fn look_at_produces_orthonormal_basis() {
        let camera = test_camera();
        assert_orthonormal_basis(camera.view_matrix());
    }

    #[test]
    fn look_at_maps_eye_to_origin_and_target_to_forward_axis() {
        let camera = test_camera();
        let view = camera.view_matrix();

        let eye_cam = view * Vec4::new(10.0, 10.0, -10.0, 1.0);
        assert!(eye_cam.truncate().length() < EPSILON);

        let target_cam = (view * Vec4::new(0.0, 0.0, 0.0, 1.0)).truncate();
        let distance = camera.position().length();
        assert!((target_cam - Vec3::new(0.0, 0.0, distance)).length() < EPSILON);
    }

    #[test]
    fn look_at_rejects_forward_parallel_to_up() {
        let mut camera = test_camera();
        let result =
            camera.look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(matches!(
            result,
            Err(ArcballError::DegenerateCameraBasis)
        ));
    }

    #[test]
    fn look_at_rejects_coincident_eye_and_target() {
        let mut camera = test_camera();
        let result = camera.look_at(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(matches!(result, Err(ArcballError::DegenerateVector)));
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let mut rng = rand::rng();
        let mut camera = test_camera();
        let initial_distance = (camera.position() - camera.pivot()).length();

        for _ in 0..100 {
            let axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            let Ok(rotation) = math::rotation_from_axis_angle(
                axis,
                rng.random_range(0.0..TAU),
            ) else {
                continue; // vanishing random axis, nothing to apply
            };
            if camera.rotate_around_pivot(rotation).is_err() {
                continue; // rotated into the degenerate vertical; skip
            }
            let distance = (camera.position() - camera.pivot()).length();
            let relative_error =
                (distance - initial_distance).abs() / initial_distance;
            assert!(
                relative_error < 1e-5,
                "distance drifted: {distance} vs {initial_distance}"
            );
        }
    }

    #[test]
    fn failed_rotation_leaves_camera_unchanged() {
        let mut camera = test_camera();
        let before_pos = camera.position();
        let before_view = camera.view_matrix();

        // Rotate the eye exactly onto the vertical axis above the target.
        let to_vertical = Quat::from_rotation_arc(
            camera.position().normalize(),
            Vec3::Y,
        );
        assert!(camera.rotate_around_pivot(to_vertical).is_err());
        assert_eq!(camera.position(), before_pos);
        assert_eq!(camera.view_matrix(), before_view);
    }

    #[test]
    fn move_to_updates_only_translation() {
        let mut camera = test_camera();
        let before = camera.view_matrix();

        camera.move_to(Vec3::new(3.0, -2.0, 7.0));
        let after = camera.view_matrix();

        assert_eq!(before.x_axis, after.x_axis);
        assert_eq!(before.y_axis, after.y_axis);
        assert_eq!(before.z_axis, after.z_axis);
        assert_eq!(camera.position(), Vec3::new(3.0, -2.0, 7.0));

        // New eye still maps to the camera-space origin.
        let eye_cam = after * Vec4::new(3.0, -2.0, 7.0, 1.0);
        assert!(eye_cam.truncate().length() < EPSILON);
    }
}
