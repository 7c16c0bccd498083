//! Trigonometric wrappers and true (floored) modulo.

use crate::foundation::constants::TAU;
use glam::Vec2;

/// Floored modulo: `x - y * floor(x / y)`.
///
/// Unlike `%`, the result is non-negative for positive `y`:
/// `modulo(-1.0, 100.0) == 99.0`.
pub fn modulo(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// Componentwise floored modulo for 2D vectors.
pub fn modulo2(x: Vec2, y: Vec2) -> Vec2 {
    Vec2::new(modulo(x.x, y.x), modulo(x.y, y.y))
}

/// `sin` with the argument reduced modulo a full turn first.
///
/// Avoids precision loss for large arguments; agrees with `f32::sin` for all
/// finite inputs within floating-point tolerance.
pub fn fix_sin(x: f32) -> f32 {
    modulo(x, TAU).sin()
}

/// `cos` with the argument reduced modulo a full turn first.
pub fn fix_cos(x: f32) -> f32 {
    modulo(x, TAU).cos()
}

/// `atan2` that is finite everywhere; the indeterminate origin maps to 0.
pub fn fix_atan2(y: f32, x: f32) -> f32 {
    if y == 0.0 && x == 0.0 {
        return 0.0;
    }
    y.atan2(x)
}

#[cfg(test)]
#[path = "../../tests/unit/math/trig.rs"]
mod tests;
