//! Full-viewport execution of a fragment entry point.
//!
//! This is the reference execution of the pipeline contract: the fragment
//! wrapper runs once per output pixel, read-only over uniforms and the
//! argument blob, writing exactly one output slot, with no cross-pixel
//! communication. Rows are distributed across the rayon pool.

use crate::effect::{Bindings, EffectAdapter, FragmentIn};
use crate::foundation::error::{StitchError, StitchResult};
use crate::texture::Texture;
use glam::{Vec2, Vec4};
use image::RgbaImage;
use rayon::prelude::*;

/// A rendered viewport of RGBA texels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major output texels.
    pub texels: Vec<Vec4>,
}

impl Frame {
    /// The texel at `(x, y)`.
    pub fn texel(&self, x: u32, y: u32) -> Vec4 {
        self.texels[(y * self.width + x) as usize]
    }

    /// Convert to an 8-bit RGBA image, clamping each channel to `[0, 1]`.
    pub fn to_rgba8(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (i, px) in img.pixels_mut().enumerate() {
            let t = self.texels[i].clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
            *px = image::Rgba([
                t.x.round() as u8,
                t.y.round() as u8,
                t.z.round() as u8,
                t.w.round() as u8,
            ]);
        }
        img
    }

    /// Reinterpret the frame as a texture, e.g. to feed a second pass.
    pub fn into_texture(self) -> StitchResult<Texture> {
        Texture::from_texels(self.width, self.height, self.texels)
    }
}

/// Run `adapter`'s fragment wrapper over every pixel of a
/// `width` × `height` viewport.
///
/// Pixel `(x, y)` is evaluated at `position = (x + 0.5, y + 0.5)` with
/// `tex_coords = position / size`. The first per-pixel error aborts the
/// dispatch.
pub fn render_fragment(
    adapter: &EffectAdapter,
    bindings: &Bindings<'_>,
    width: u32,
    height: u32,
) -> StitchResult<Frame> {
    if width == 0 || height == 0 {
        return Err(StitchError::validation(format!(
            "viewport must be nonzero, got {width}x{height}"
        )));
    }
    tracing::trace!(
        effect = adapter.name(),
        kind = ?adapter.kind(),
        width,
        height,
        "dispatching fragment wrapper"
    );
    let size = Vec2::new(width as f32, height as f32);

    let rows: Vec<Vec<Vec4>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let position = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    adapter.fragment(&FragmentIn::at(position, size), bindings)
                })
                .collect::<StitchResult<Vec<Vec4>>>()
        })
        .collect::<StitchResult<Vec<_>>>()?;

    Ok(Frame {
        width,
        height,
        texels: rows.into_iter().flatten().collect(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/dispatch.rs"]
mod tests;
