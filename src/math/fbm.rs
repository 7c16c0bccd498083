//! Fractal Brownian motion: layered value noise.

use crate::math::noise::noise_perlin2;
use crate::math::rot::rot2d;
use glam::Vec2;

/// Fractal Brownian motion accumulator.
///
/// `emit` is a pure function of the configuration and the input point; no
/// state is carried between calls. With `octaves = 1` the result is exactly
/// `amplitude * noise_perlin2(p * frequency + shift)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fbm {
    /// Number of noise layers summed.
    pub octaves: u32,
    /// Per-octave frequency multiplier.
    pub lacunarity: f32,
    /// Per-octave amplitude multiplier.
    pub gain: f32,
    /// Base sampling frequency.
    pub frequency: f32,
    /// Base amplitude.
    pub amplitude: f32,
    /// Offset added to the sampling point at every octave.
    pub shift: Vec2,
    /// Rotation (radians) applied to the point between octaves.
    pub rotation: f32,
}

impl Default for Fbm {
    fn default() -> Self {
        Self {
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            frequency: 1.0,
            amplitude: 1.0,
            shift: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Fbm {
    /// Sum `octaves` noise layers at `p`.
    pub fn emit(&self, p: Vec2) -> f32 {
        let rot = rot2d(self.rotation);
        let mut point = p;
        let mut frequency = self.frequency;
        let mut amplitude = self.amplitude;
        let mut total = 0.0;

        for _ in 0..self.octaves {
            total += amplitude * noise_perlin2(point * frequency + self.shift);
            point = rot * point;
            frequency *= self.lacunarity;
            amplitude *= self.gain;
        }
        total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/fbm.rs"]
mod tests;
