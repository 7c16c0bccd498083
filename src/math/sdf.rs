//! Signed distance functions and combinators.
//!
//! All distances are signed Euclidean (or appropriately normalized):
//! negative strictly inside, zero on the boundary, positive strictly outside.
//! The `_at` variants take an explicit origin/center; the short forms place
//! the shape at the coordinate-space origin, behaving identically to passing
//! the zero vector explicitly.

use glam::{Vec2, Vec3, Vec4};

/// Distance from `p` to a sphere of radius `radius` centered at the origin.
pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    sd_sphere_at(p, radius, Vec3::ZERO)
}

/// Distance from `p` to a sphere of radius `radius` centered at `origin`.
pub fn sd_sphere_at(p: Vec3, radius: f32, origin: Vec3) -> f32 {
    (p - origin).length() - radius
}

/// Distance from `p` to an axis-aligned box with half-extents `sides`.
pub fn sd_box(p: Vec3, sides: Vec3) -> f32 {
    let q = p.abs() - sides;
    q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
}

/// Distance from `p` to a torus in the xz plane centered at the origin.
///
/// `outer_radius` is the ring radius, `inner_radius` the tube radius.
pub fn sd_torus(p: Vec3, outer_radius: f32, inner_radius: f32) -> f32 {
    sd_torus_at(p, outer_radius, inner_radius, Vec3::ZERO)
}

/// Distance from `p` to a torus centered at `center`.
pub fn sd_torus_at(p: Vec3, outer_radius: f32, inner_radius: f32, center: Vec3) -> f32 {
    let p = p - center;
    let q = Vec2::new(Vec2::new(p.x, p.z).length() - outer_radius, p.y);
    q.length() - inner_radius
}

/// Distance from `p` to the default plane: upward-facing, through the origin.
pub fn sd_plane(p: Vec3) -> f32 {
    sd_plane_n(p, Vec4::new(0.0, 1.0, 0.0, 0.0))
}

/// Distance from `p` to the plane `dot(p, n.xyz) + n.w = 0`.
///
/// `n.xyz` must be unit length for the result to be a true distance.
pub fn sd_plane_n(p: Vec3, n: Vec4) -> f32 {
    p.dot(n.truncate()) + n.w
}

/// Distance from `p` to a circle of radius `r` centered at the origin.
pub fn sd_circle(p: Vec2, r: f32) -> f32 {
    sd_circle_at(p, r, Vec2::ZERO)
}

/// Distance from `p` to a circle of radius `r` centered at `origin`.
pub fn sd_circle_at(p: Vec2, r: f32, origin: Vec2) -> f32 {
    (p - origin).length() - r
}

/// Unsigned distance from `p` to the segment `a`-`b`.
pub fn sd_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length()
}

/// Signed distance from `p` to the triangle `a`-`b`-`c` (negative inside).
pub fn sd_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let e0 = b - a;
    let e1 = c - b;
    let e2 = a - c;
    let v0 = p - a;
    let v1 = p - b;
    let v2 = p - c;

    let pq0 = v0 - e0 * (v0.dot(e0) / e0.dot(e0)).clamp(0.0, 1.0);
    let pq1 = v1 - e1 * (v1.dot(e1) / e1.dot(e1)).clamp(0.0, 1.0);
    let pq2 = v2 - e2 * (v2.dot(e2) / e2.dot(e2)).clamp(0.0, 1.0);

    let s = (e0.x * e2.y - e0.y * e2.x).signum();
    let d = Vec2::new(pq0.dot(pq0), s * (v0.x * e0.y - v0.y * e0.x))
        .min(Vec2::new(pq1.dot(pq1), s * (v1.x * e1.y - v1.y * e1.x)))
        .min(Vec2::new(pq2.dot(pq2), s * (v2.x * e2.y - v2.y * e2.x)));
    -d.x.sqrt() * d.y.signum()
}

/// Union of two distances: `min(d1, d2)`.
pub fn sd_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Intersection of two distances: `max(a, b)`.
pub fn sd_intersect(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Subtraction of `d2` from `d1`: `max(d1, -d2)`.
pub fn sd_subtract(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}

/// Map `p` into a repeating cell of size `c`, centered on the cell origin.
///
/// Evaluating an SDF at the returned point tiles the shape infinitely.
pub fn op_rep(p: Vec3, c: Vec3) -> Vec3 {
    p - c * (p / c).round()
}

#[cfg(test)]
#[path = "../../tests/unit/math/sdf.rs"]
mod tests;
