//! Coordinate-space conversions: viewport/world mappings and hex grids.
//!
//! "World" space is centered on the viewport, aspect-corrected so one unit of
//! y spans half the viewport height. Hex grids are pointy-top with unit
//! circumradius, addressed in axial coordinates.

use glam::{Vec2, Vec3};

const SQRT3: f32 = 1.732_050_8;

/// Viewport pixel position to centered world coordinates (y-normalized).
pub fn world_coord(position: Vec2, size: Vec2) -> Vec2 {
    (2.0 * position - size) / size.y
}

/// [`world_coord`] with the vertical axis flipped (y grows upward).
pub fn world_coord_adjusted(position: Vec2, size: Vec2) -> Vec2 {
    let w = world_coord(position, size);
    Vec2::new(w.x, -w.y)
}

/// Normalized texture coordinates (`[0, 1]²`) to centered `[-1, 1]²`.
pub fn to_world(x: Vec2) -> Vec2 {
    2.0 * x - Vec2::ONE
}

/// Aspect factor for a viewport: `size / size.y`.
pub fn node_aspect(size: Vec2) -> Vec2 {
    size / size.y
}

/// Flip the vertical axis of a normalized-device coordinate.
pub fn yflip(x: Vec2) -> Vec2 {
    Vec2::new(x.x, -x.y)
}

/// Nearest hex cell (axial coordinates) containing pixel point `p`.
pub fn pix_to_hex(p: Vec2) -> Vec2 {
    let q = SQRT3 / 3.0 * p.x - p.y / 3.0;
    let r = 2.0 / 3.0 * p.y;
    axial_round(Vec2::new(q, r))
}

/// Center of the hex cell `h` (axial coordinates) in pixel space.
pub fn hex_to_pix(h: Vec2) -> Vec2 {
    Vec2::new(SQRT3 * h.x + SQRT3 / 2.0 * h.y, 1.5 * h.y)
}

/// Nearest hex center and the distance of `p` to it, as `(cx, cy, dist)`.
pub fn hex_grid(p: Vec2) -> Vec3 {
    let center = hex_to_pix(pix_to_hex(p));
    center.extend((p - center).length())
}

/// Distance from `p` to the nearest edge of its hex cell (0 on the edge).
pub fn hex_edge_dist(p: Vec2) -> f32 {
    let rel = (p - hex_to_pix(pix_to_hex(p))).abs();
    let inradius = SQRT3 / 2.0;
    // Support over the three edge-normal directions of a pointy-top hexagon.
    inradius - rel.x.max(0.5 * rel.x + inradius * rel.y)
}

fn axial_round(h: Vec2) -> Vec2 {
    // Cube rounding: x + y + z = 0 with z implied.
    let x = h.x;
    let z = h.y;
    let y = -x - z;

    let mut rx = x.round();
    let mut rz = z.round();
    let ry = y.round();

    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy <= dz {
        rz = -rx - ry;
    }
    Vec2::new(rx, rz)
}

#[cfg(test)]
#[path = "../../tests/unit/math/coords.rs"]
mod tests;
