//! Fallible and clamped math operations on top of [`glam`].
//!
//! `glam` supplies the vector/matrix/quaternion types and the bulk
//! operations (`cross`, `dot`, `length`, 4x4 multiply, `transpose`,
//! identity). This module adds the pieces interactive camera control needs
//! on top of it: normalization that reports degeneracy instead of
//! returning NaN, axis-angle rotation construction through the quaternion
//! path, and the hemisphere projection used by the virtual trackball.
//!
//! # Matrix convention
//!
//! The whole crate uses glam's convention and no other: matrices are
//! column-major, vectors are column vectors, `m * v` applies `m` to `v`,
//! and `a * b` composes right-to-left (`b` first). Every call site in this
//! crate assumes exactly this; do not mix in row-vector conventions.

use glam::{Quat, Vec2, Vec3};

use crate::error::ArcballError;

/// Tolerance below which a squared length counts as zero.
pub const DEGENERACY_EPSILON: f32 = 1e-12;

/// Normalize `v`, failing with [`ArcballError::DegenerateVector`] when its
/// magnitude is zero (or close enough that the quotient would be garbage).
pub fn try_normalize(v: Vec3) -> Result<Vec3, ArcballError> {
    if v.length_squared() <= DEGENERACY_EPSILON {
        return Err(ArcballError::DegenerateVector);
    }
    Ok(v.normalize())
}

/// Build the rotation taking vectors around `axis` by `angle` radians.
///
/// The axis does not need to be pre-normalized; it is normalized here. The
/// result is exact in the Rodrigues sense: applying the returned quaternion
/// to a vector equals rotating it by `angle` around the normalized axis.
///
/// Fails with [`ArcballError::DegenerateVector`] when `axis` has zero
/// length.
pub fn rotation_from_axis_angle(
    axis: Vec3,
    angle: f32,
) -> Result<Quat, ArcballError> {
    let axis = try_normalize(axis)?;
    Ok(Quat::from_axis_angle(axis, angle))
}

/// Project a point in the NDC unit square onto the virtual unit hemisphere.
///
/// `z = sqrt(max(0, 1 - x^2 - y^2))`. Points on or outside the unit circle
/// land on the sphere's equator (`z = 0`) instead of producing NaN; pointer
/// coordinates routinely fall slightly outside the disc due to rounding, so
/// the clamp is load-bearing.
#[must_use]
pub fn project_to_sphere(p: Vec2) -> Vec3 {
    let z = (1.0 - p.x * p.x - p.y * p.y).max(0.0).sqrt();
    Vec3::new(p.x, p.y, z)
}
