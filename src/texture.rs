//! CPU-resident RGBA texture with bilinear sampling.
//!
//! Texels are straight-alpha `Vec4` in `[0, 1]`. Sampling follows the
//! pipeline's default sampler state: normalized coordinates, bilinear
//! filtering, clamp-to-edge addressing.

use crate::foundation::error::{StitchError, StitchResult};
use glam::{Vec2, Vec4};
use image::RgbaImage;

/// A width × height grid of RGBA texels.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl Texture {
    /// Build a texture from a row-major texel slice.
    ///
    /// Fails with [`StitchError::Validation`] when the slice length does not
    /// equal `width * height` or either dimension is zero.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Vec4>) -> StitchResult<Self> {
        if width == 0 || height == 0 {
            return Err(StitchError::validation(format!(
                "texture dimensions must be nonzero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(StitchError::validation(format!(
                "texture {width}x{height} needs {expected} texels, got {}",
                texels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// A texture filled with a single color.
    pub fn solid(width: u32, height: u32, color: Vec4) -> StitchResult<Self> {
        Self::from_texels(width, height, vec![color; width as usize * height as usize])
    }

    /// Build a texture by evaluating `f` at every texel center.
    ///
    /// `f` receives integer texel coordinates with `(0, 0)` at the top left.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> StitchResult<Self>
    where
        F: Fn(u32, u32) -> Vec4,
    {
        if width == 0 || height == 0 {
            return Err(StitchError::validation(format!(
                "texture dimensions must be nonzero, got {width}x{height}"
            )));
        }
        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                texels.push(f(x, y));
            }
        }
        Self::from_texels(width, height, texels)
    }

    /// Build a texture from 8-bit RGBA bytes, mapping each channel to `[0, 1]`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> StitchResult<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(StitchError::validation(format!(
                "texture {width}x{height} needs {expected} bytes, got {}",
                bytes.len()
            )));
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| {
                Vec4::new(
                    px[0] as f32 / 255.0,
                    px[1] as f32 / 255.0,
                    px[2] as f32 / 255.0,
                    px[3] as f32 / 255.0,
                )
            })
            .collect();
        Self::from_texels(width, height, texels)
    }

    /// Decode an encoded image (PNG, JPEG, ...) into a texture.
    pub fn from_image_bytes(bytes: &[u8]) -> StitchResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| StitchError::validation(format!("image decode failed: {e}")))?
            .into_rgba8();
        Self::from_rgba8(img.width(), img.height(), img.as_raw())
    }

    /// Texture width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texture dimensions as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Read the texel at integer coordinates, clamped to the texture bounds.
    pub fn read(&self, x: i64, y: i64) -> Vec4 {
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        self.texels[cy * self.width as usize + cx]
    }

    /// Sample at normalized coordinates with bilinear filtering.
    ///
    /// `uv = (0, 0)` is the top-left corner, `(1, 1)` the bottom-right.
    /// Coordinates outside `[0, 1]` clamp to the edge texels. Subtexel
    /// position is quantized to 8 fractional bits like a hardware sampler,
    /// so sampling any texel center `(x + 0.5, y + 0.5) / size` returns that
    /// texel exactly.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let pos = uv * self.size() - Vec2::splat(0.5);
        let base = pos.floor();
        let (x0, fx) = quantize(pos.x - base.x, base.x as i64);
        let (y0, fy) = quantize(pos.y - base.y, base.y as i64);

        let c00 = self.read(x0, y0);
        let c10 = self.read(x0 + 1, y0);
        let c01 = self.read(x0, y0 + 1);
        let c11 = self.read(x0 + 1, y0 + 1);

        let top = c00.lerp(c10, fx);
        let bottom = c01.lerp(c11, fx);
        top.lerp(bottom, fy)
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

    /// Row-major texel slice.
    pub fn texels(&self) -> &[Vec4] {
        &self.texels
    }
}

// Quantize a subtexel fraction to 1/256 steps, carrying a full step into the
// base texel index.
fn quantize(frac: f32, base: i64) -> (i64, f32) {
    let q = (frac * 256.0).round() / 256.0;
    if q >= 1.0 { (base + 1, 0.0) } else { (base, q) }
}

#[cfg(test)]
#[path = "../tests/unit/texture.rs"]
mod tests;
