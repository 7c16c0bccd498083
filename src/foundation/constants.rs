//! Read-only numeric constants shared by the math library and effects.
//!
//! These are process-wide and immutable; every parallel invocation of an
//! effect sees the same values.

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// One full turn, `2 * PI`.
pub const TAU: f32 = std::f32::consts::TAU;

/// Euler's number.
pub const E: f32 = std::f32::consts::E;

/// Tolerance used for near-zero guards in blends and normalization.
pub const EPSILON: f32 = 1e-6;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const GOLDEN_RATIO: f32 = 1.618_034;
