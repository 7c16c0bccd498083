//! Rotation matrix builders and matrix inverses.
//!
//! All rotation builders return orthonormal matrices (determinant 1, unit
//! rows/columns) for every finite input.

use crate::foundation::constants::PI;
use crate::math::trig::{fix_cos, fix_sin};
use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// 2D rotation by `angle` radians (counterclockwise).
pub fn rot2d(angle: f32) -> Mat2 {
    let c = fix_cos(angle);
    let s = fix_sin(angle);
    Mat2::from_cols(Vec2::new(c, s), Vec2::new(-s, c))
}

/// 2D rotation by `x` half-turns, i.e. `rot2d(x * PI)`.
pub fn rot2d_pi(x: f32) -> Mat2 {
    rot2d(x * PI)
}

/// 3D rotation about an arbitrary `axis` by `angle` radians (Rodrigues).
///
/// `axis` is normalized internally; a zero axis yields a NaN-filled matrix.
pub fn rotate(axis: Vec3, angle: f32) -> Mat3 {
    Mat3::from_axis_angle(axis.normalize(), angle)
}

/// Rotation about the x axis.
pub fn rot_x(angle: f32) -> Mat3 {
    Mat3::from_rotation_x(angle)
}

/// Rotation about the y axis.
pub fn rot_y(angle: f32) -> Mat3 {
    Mat3::from_rotation_y(angle)
}

/// Rotation about the z axis.
pub fn rot_z(angle: f32) -> Mat3 {
    Mat3::from_rotation_z(angle)
}

/// Pack a `Vec4` into a 2×2 matrix, column major: `[[x, y], [z, w]]`.
pub fn make_mat(v: Vec4) -> Mat2 {
    Mat2::from_cols(Vec2::new(v.x, v.y), Vec2::new(v.z, v.w))
}

/// Inverse of a 2×2 matrix.
///
/// Satisfies `m * inverse2(m) ≈ I` for non-singular `m`. Singular and
/// near-singular inputs propagate NaN/Inf components; they are never
/// undefined behavior, but callers must not rely on the values.
pub fn inverse2(m: Mat2) -> Mat2 {
    m.inverse()
}

/// Inverse of a 3×3 matrix. Same singular-input caveats as [`inverse2`].
pub fn inverse3(m: Mat3) -> Mat3 {
    m.inverse()
}

/// Inverse of a 4×4 matrix. Same singular-input caveats as [`inverse2`].
pub fn inverse4(m: Mat4) -> Mat4 {
    m.inverse()
}

#[cfg(test)]
#[path = "../../tests/unit/math/rot.rs"]
mod tests;
