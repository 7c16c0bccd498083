//! Deterministic hash functions and value noise.
//!
//! All of these are pure functions of their float inputs; there is no seeded
//! global state. The `rand*`/`prand*`/`hash4` family is discontinuous by
//! construction (white noise over the input domain), while the
//! `noise_perlin*` functions are continuous and band-limited.

use glam::{Vec2, Vec3, Vec4};

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Scalar hash of a scalar.
pub fn rand_f(n: f32) -> f32 {
    fract(n.sin() * 43_758.547)
}

/// Scalar hash of a 2D point.
pub fn rand_v2(p: Vec2) -> f32 {
    fract(p.dot(Vec2::new(12.9898, 78.233)).sin() * 43_758.547)
}

/// Scalar hash of a 3D point.
pub fn rand_v3(p: Vec3) -> f32 {
    fract(p.dot(Vec3::new(12.9898, 78.233, 37.719)).sin() * 43_758.547)
}

/// 2D hash of a 2D point.
pub fn rand2(p: Vec2) -> Vec2 {
    Vec2::new(
        fract(p.dot(Vec2::new(127.1, 311.7)).sin() * 43_758.547),
        fract(p.dot(Vec2::new(269.5, 183.3)).sin() * 43_758.547),
    )
}

/// 3D hash of a 2D point with an extra scalar `seed` folded in.
pub fn rand3(p: Vec2, seed: f32) -> Vec3 {
    let q = p + Vec2::splat(seed);
    Vec3::new(
        fract(q.dot(Vec2::new(127.1, 311.7)).sin() * 43_758.547),
        fract(q.dot(Vec2::new(269.5, 183.3)).sin() * 43_758.547),
        fract(q.dot(Vec2::new(419.2, 371.9)).sin() * 43_758.547),
    )
}

/// 4D hash of a 2D point.
pub fn rand4(p: Vec2) -> Vec4 {
    Vec4::new(
        fract(p.dot(Vec2::new(127.1, 311.7)).sin() * 43_758.547),
        fract(p.dot(Vec2::new(269.5, 183.3)).sin() * 43_758.547),
        fract(p.dot(Vec2::new(419.2, 371.9)).sin() * 43_758.547),
        fract(p.dot(Vec2::new(113.5, 271.9)).sin() * 43_758.547),
    )
}

/// Parametrized scalar hash: a second point perturbs the lattice.
pub fn prand(p: Vec2, q: Vec2) -> f32 {
    fract((p.dot(Vec2::new(12.9898, 78.233)) + q.dot(Vec2::new(4.898, 7.23))).sin() * 43_758.547)
}

/// Parametrized 2D hash.
pub fn prand2(p: Vec2, q: Vec2) -> Vec2 {
    Vec2::new(prand(p, q), prand(p + Vec2::new(17.0, 59.4), q))
}

/// Parametrized 3D hash.
pub fn prand3(p: Vec2, q: Vec2) -> Vec3 {
    prand2(p, q).extend(prand(p + Vec2::new(41.3, 23.9), q))
}

/// Parametrized 4D hash.
pub fn prand4(p: Vec2, q: Vec2) -> Vec4 {
    prand3(p, q).extend(prand(p + Vec2::new(73.1, 11.7), q))
}

/// 4D hash of a scalar.
pub fn hash4(n: f32) -> Vec4 {
    Vec4::new(
        fract(n.sin() * 43_758.547),
        fract((n + 1.0).sin() * 43_758.547),
        fract((n + 57.0).sin() * 43_758.547),
        fract((n + 58.0).sin() * 43_758.547),
    )
}

fn fade2(t: Vec2) -> Vec2 {
    t * t * (Vec2::splat(3.0) - 2.0 * t)
}

/// Randomness blended bilinearly across a spatial grid of `reso` cells.
pub fn interporand(pos: Vec2, reso: f32) -> Vec3 {
    let scaled = pos * reso;
    let i = scaled.floor();
    let f = fade2(scaled - i);

    let c00 = rand3(i, 0.0);
    let c10 = rand3(i + Vec2::new(1.0, 0.0), 0.0);
    let c01 = rand3(i + Vec2::new(0.0, 1.0), 0.0);
    let c11 = rand3(i + Vec2::new(1.0, 1.0), 0.0);

    let x0 = c00.lerp(c10, f.x);
    let x1 = c01.lerp(c11, f.x);
    x0.lerp(x1, f.y)
}

/// [`interporand`] at the default grid resolution of 256.
pub fn interporand_256(pos: Vec2) -> Vec3 {
    interporand(pos, 256.0)
}

/// 1D value noise, continuous in `x`, output in `[0, 1]`.
pub fn noise_perlin1(x: f32) -> f32 {
    let i = x.floor();
    let f = x - i;
    let u = f * f * (3.0 - 2.0 * f);
    rand_f(i) * (1.0 - u) + rand_f(i + 1.0) * u
}

/// 2D value noise, continuous in `p`, output in `[0, 1]`.
pub fn noise_perlin2(p: Vec2) -> f32 {
    let i = p.floor();
    let f = fade2(p - i);

    let a = rand_v2(i);
    let b = rand_v2(i + Vec2::new(1.0, 0.0));
    let c = rand_v2(i + Vec2::new(0.0, 1.0));
    let d = rand_v2(i + Vec2::new(1.0, 1.0));

    let x0 = a * (1.0 - f.x) + b * f.x;
    let x1 = c * (1.0 - f.x) + d * f.x;
    x0 * (1.0 - f.y) + x1 * f.y
}

/// 3D value noise, continuous in `p`, output in `[0, 1]`.
pub fn noise_perlin3(p: Vec3) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let corner = |o: Vec3| rand_v3(i + o);
    let lerp = |a: f32, b: f32, t: f32| a * (1.0 - t) + b * t;

    let x00 = lerp(corner(Vec3::ZERO), corner(Vec3::X), u.x);
    let x10 = lerp(corner(Vec3::Y), corner(Vec3::new(1.0, 1.0, 0.0)), u.x);
    let x01 = lerp(corner(Vec3::Z), corner(Vec3::new(1.0, 0.0, 1.0)), u.x);
    let x11 = lerp(corner(Vec3::new(0.0, 1.0, 1.0)), corner(Vec3::ONE), u.x);

    let y0 = lerp(x00, x10, u.y);
    let y1 = lerp(x01, x11, u.y);
    lerp(y0, y1, u.z)
}

#[cfg(test)]
#[path = "../../tests/unit/math/noise.rs"]
mod tests;
