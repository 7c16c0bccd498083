//! Smooth minimum/maximum blends over signed distances.
//!
//! Each `*_smin` takes a blend radius `k` and reduces to the hard `min` as
//! `k → 0`; every variant is continuous in both operands and in `k`, and for
//! `k > 0` stays within `[min(a, b), (a + b) / 2]`. The `*_smax` forms are
//! the mirrored duals, `-smin(-a, -b, k)`.

use crate::foundation::constants::EPSILON;

/// Polynomial smooth minimum.
pub fn poly_smin(a: f32, b: f32, k: f32) -> f32 {
    if k <= EPSILON {
        return a.min(b);
    }
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    b * (1.0 - h) + a * h
}

/// Polynomial smooth maximum.
pub fn poly_smax(a: f32, b: f32, k: f32) -> f32 {
    -poly_smin(-a, -b, k)
}

/// Exponential smooth minimum (Boltzmann-weighted average of the operands).
pub fn exp_smin(a: f32, b: f32, k: f32) -> f32 {
    if k <= EPSILON {
        return a.min(b);
    }
    // Shift by the minimum so the exponentials stay in (0, 1].
    let m = a.min(b);
    let wa = (-(a - m) / k).exp();
    let wb = (-(b - m) / k).exp();
    (a * wa + b * wb) / (wa + wb)
}

/// Exponential smooth maximum.
pub fn exp_smax(a: f32, b: f32, k: f32) -> f32 {
    -exp_smin(-a, -b, k)
}

/// Commutative quadratic smooth minimum.
pub fn comm_smin(a: f32, b: f32, k: f32) -> f32 {
    if k <= EPSILON {
        return a.min(b);
    }
    let h = ((k - (a - b).abs()).max(0.0)) / k;
    a.min(b) + h * h * (a - b).abs() * 0.25
}

/// Commutative quadratic smooth maximum.
pub fn comm_smax(a: f32, b: f32, k: f32) -> f32 {
    -comm_smin(-a, -b, k)
}

#[cfg(test)]
#[path = "../../tests/unit/math/blend.rs"]
mod tests;
