//! Layer access for multi-tap layer effects.

use crate::texture::Texture;
use glam::{Vec2, Vec4};

/// A base-layer texture plus the per-dispatch texel-offset table.
///
/// `info` is rebuilt fresh for every dispatch from the frame's inverse
/// resolution; layer functions use it for neighbor taps and edge-safe
/// clamping without knowing the viewport size:
///
/// - `info[0]`: one-texel step in x,
/// - `info[1]`: one-texel step in y,
/// - `info[2]`: zero,
/// - `info[3]`: half-texel inset minimum,
/// - `info[4]`: half-texel inset maximum.
#[derive(Clone, Copy, Debug)]
pub struct Layer<'a> {
    /// The base texture (unit 2).
    pub tex: &'a Texture,
    /// The texel-offset table described above.
    pub info: [Vec2; 5],
}

impl<'a> Layer<'a> {
    /// Build the layer for a dispatch with the given inverse resolution.
    pub fn for_viewport(tex: &'a Texture, inverse_resolution: Vec2) -> Self {
        let inv = inverse_resolution;
        Self {
            tex,
            info: [
                Vec2::new(inv.x, 0.0),
                Vec2::new(0.0, inv.y),
                Vec2::ZERO,
                0.5 * inv,
                Vec2::ONE - 0.5 * inv,
            ],
        }
    }

    /// Sample the base texture with `uv` clamped into the half-texel inset
    /// bounds, so taps offset past the edge stay on valid texels.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        self.tex.sample(uv.clamp(self.info[3], self.info[4]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/layer.rs"]
mod tests;
