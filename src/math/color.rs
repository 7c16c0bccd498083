//! Color-space conversions and small color utilities.
//!
//! RGB values are straight (non-premultiplied) and nominally in `[0, 1]`.
//! Gamma encode/decode use a pure power curve with exponent 2.2 and are
//! mutual inverses to floating-point tolerance.

use crate::foundation::constants::TAU;
use glam::{Vec2, Vec3, Vec4};

const GAMMA: f32 = 2.2;

/// Grayscale via YIQ luma weighting.
pub fn grayscale(c: Vec3) -> f32 {
    c.dot(Vec3::new(0.299, 0.587, 0.114))
}

/// Relative luminance with Rec. 709 weights.
pub fn luminance(c: Vec3) -> f32 {
    c.dot(Vec3::new(0.2126, 0.7152, 0.0722))
}

/// RGB to HSV (all components in `[0, 1]`, hue as a fraction of a turn).
pub fn rgb2hsv(c: Vec3) -> Vec3 {
    let max = c.max_element();
    let min = c.min_element();
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == c.x {
        ((c.y - c.z) / delta).rem_euclid(6.0) / 6.0
    } else if max == c.y {
        ((c.z - c.x) / delta + 2.0) / 6.0
    } else {
        ((c.x - c.y) / delta + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    Vec3::new(h, s, max)
}

/// HSV to RGB (hue as a fraction of a turn).
pub fn hsv2rgb(c: Vec3) -> Vec3 {
    let h = c.x.rem_euclid(1.0) * 6.0;
    let s = c.y;
    let v = c.z;

    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i as i32 {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}

/// RGB to HSL (hue as a fraction of a turn).
pub fn rgb2hsl(c: Vec3) -> Vec3 {
    let max = c.max_element();
    let min = c.min_element();
    let l = 0.5 * (max + min);
    let delta = max - min;

    if delta == 0.0 {
        return Vec3::new(0.0, 0.0, l);
    }
    let s = delta / (1.0 - (2.0 * l - 1.0).abs()).max(f32::EPSILON);
    let h = if max == c.x {
        ((c.y - c.z) / delta).rem_euclid(6.0) / 6.0
    } else if max == c.y {
        ((c.z - c.x) / delta + 2.0) / 6.0
    } else {
        ((c.x - c.y) / delta + 4.0) / 6.0
    };
    Vec3::new(h, s, l)
}

/// HSL to RGB (hue as a fraction of a turn).
pub fn hsl2rgb(c: Vec3) -> Vec3 {
    let h = c.x.rem_euclid(1.0) * 6.0;
    let s = c.y;
    let l = c.z;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = l - 0.5 * chroma;

    let rgb = match h.floor() as i32 {
        0 => Vec3::new(chroma, x, 0.0),
        1 => Vec3::new(x, chroma, 0.0),
        2 => Vec3::new(0.0, chroma, x),
        3 => Vec3::new(0.0, x, chroma),
        4 => Vec3::new(x, 0.0, chroma),
        _ => Vec3::new(chroma, 0.0, x),
    };
    rgb + Vec3::splat(m)
}

/// Gamma-encode a linear RGB color (exponent `1 / 2.2`).
pub fn gamma_encode(c: Vec3) -> Vec3 {
    c.max(Vec3::ZERO).powf(1.0 / GAMMA)
}

/// Gamma-decode an encoded RGB color (exponent `2.2`).
pub fn gamma_decode(c: Vec3) -> Vec3 {
    c.max(Vec3::ZERO).powf(GAMMA)
}

/// Gamma-encode an RGBA color; alpha passes through untouched.
pub fn gamma_encode4(c: Vec4) -> Vec4 {
    gamma_encode(c.truncate()).extend(c.w)
}

/// Gamma-decode an RGBA color; alpha passes through untouched.
pub fn gamma_decode4(c: Vec4) -> Vec4 {
    gamma_decode(c.truncate()).extend(c.w)
}

/// Spread a single channel into a fully opaque gray color.
pub fn opaque1(c: f32) -> Vec4 {
    Vec4::new(c, c, c, 1.0)
}

/// Force an RGB color fully opaque.
pub fn opaque3(c: Vec3) -> Vec4 {
    c.extend(1.0)
}

/// Build a fully opaque color from three channels.
pub fn opaque_rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

/// Replace the alpha of an RGBA color with fully opaque.
pub fn opaque4(c: Vec4) -> Vec4 {
    Vec4::new(c.x, c.y, c.z, 1.0)
}

/// Cosine color palette: `a + b * cos(TAU * (c * t + d))`.
pub fn palette(t: f32, a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Vec3 {
    let arg = (c * t + d) * TAU;
    a + b * Vec3::new(arg.x.cos(), arg.y.cos(), arg.z.cos())
}

/// Vignette weight for `uv` in `[0, 1]²`; `p` controls falloff sharpness.
pub fn vignette(uv: Vec2, p: f32) -> f32 {
    (16.0 * uv.x * uv.y * (1.0 - uv.x) * (1.0 - uv.y)).max(0.0).powf(p)
}

/// Approximate blackbody color for a temperature in kelvin, in `[0, 1]³`.
///
/// Piecewise fit of the Planckian locus, clamped channelwise; usable from
/// roughly 1000 K to 40000 K.
pub fn blackbody(temp: f32) -> Vec3 {
    let t = (temp / 100.0).clamp(10.0, 400.0);

    let r = if t <= 66.0 {
        1.0
    } else {
        1.292_936_2 * (t - 60.0).powf(-0.133_204_76)
    };
    let g = if t <= 66.0 {
        0.390_081_57 * t.ln() - 0.631_841_44
    } else {
        1.129_890_9 * (t - 60.0).powf(-0.075_514_846)
    };
    let b = if t >= 66.0 {
        1.0
    } else if t <= 19.0 {
        0.0
    } else {
        0.543_206_78 * (t - 10.0).ln() - 1.196_254_1
    };
    Vec3::new(r, g, b).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Product of the components of a 2D vector.
pub fn prod2(x: Vec2) -> f32 {
    x.x * x.y
}

/// Product of the components of a 3D vector.
pub fn prod3(x: Vec3) -> f32 {
    x.x * x.y * x.z
}

/// Product of the components of a 4D vector.
pub fn prod4(x: Vec4) -> f32 {
    x.x * x.y * x.z * x.w
}

#[cfg(test)]
#[path = "../../tests/unit/math/color.rs"]
mod tests;
