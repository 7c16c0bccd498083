use super::*;

#[test]
fn hashes_are_deterministic() {
    let p = Vec2::new(12.5, -3.25);
    assert_eq!(rand_v2(p), rand_v2(p));
    assert_eq!(rand2(p), rand2(p));
    assert_eq!(rand3(p, 7.0), rand3(p, 7.0));
    assert_eq!(rand4(p), rand4(p));
    assert_eq!(hash4(42.0), hash4(42.0));
}

#[test]
fn scalar_hashes_land_in_unit_interval() {
    for i in 0..100 {
        let x = i as f32 * 0.73 - 20.0;
        let p = Vec2::new(x, x * 1.7 + 3.0);
        for v in [
            rand_f(x),
            rand_v2(p),
            rand_v3(p.extend(x)),
            prand(p, Vec2::new(0.3, 0.9)),
        ] {
            assert!((0.0..1.0).contains(&v), "hash out of range: {v}");
        }
    }
}

#[test]
fn vector_hashes_land_in_unit_interval() {
    for i in 0..50 {
        let p = Vec2::new(i as f32 * 1.3, i as f32 * -0.7);
        let v2 = rand2(p);
        let v3 = rand3(p, 5.0);
        let v4 = rand4(p);
        assert!(v2.min_element() >= 0.0 && v2.max_element() < 1.0);
        assert!(v3.min_element() >= 0.0 && v3.max_element() < 1.0);
        assert!(v4.min_element() >= 0.0 && v4.max_element() < 1.0);
    }
}

#[test]
fn seed_perturbs_rand3() {
    let p = Vec2::new(4.0, 9.0);
    assert_ne!(rand3(p, 0.0), rand3(p, 1.0));
}

#[test]
fn parametrized_hashes_decorrelate_in_q() {
    let p = Vec2::new(1.0, 2.0);
    assert_ne!(prand(p, Vec2::ZERO), prand(p, Vec2::ONE));
    assert_ne!(prand2(p, Vec2::ZERO), prand2(p, Vec2::ONE));
    assert_ne!(prand4(p, Vec2::ZERO).w, prand4(p, Vec2::ONE).w);
}

#[test]
fn prand_extensions_agree_on_shared_lanes() {
    let p = Vec2::new(3.0, -1.0);
    let q = Vec2::new(0.5, 0.25);
    assert_eq!(prand2(p, q).x, prand(p, q));
    assert_eq!(prand3(p, q).truncate(), prand2(p, q));
    assert_eq!(prand4(p, q).truncate(), prand3(p, q));
}

#[test]
fn hash4_lanes_are_shifted_scalar_hashes() {
    let h = hash4(5.0);
    assert_eq!(h.x, rand_f(5.0));
    assert_eq!(h.y, rand_f(6.0));
    assert_eq!(h.z, rand_f(62.0));
    assert_eq!(h.w, rand_f(63.0));
}

#[test]
fn interporand_hits_lattice_values() {
    // At grid points the bilinear blend collapses to the corner hash.
    let reso = 8.0;
    let cell = Vec2::new(3.0, 5.0);
    let v = interporand(cell / reso, reso);
    assert!((v - rand3(cell, 0.0)).length() < 1e-4);
}

#[test]
fn interporand_default_resolution() {
    let p = Vec2::new(0.123, 0.456);
    assert_eq!(interporand_256(p), interporand(p, 256.0));
}

#[test]
fn value_noise_stays_in_unit_interval() {
    for i in 0..200 {
        let x = i as f32 * 0.173 - 17.0;
        let p = Vec2::new(x, x * 0.61);
        assert!((0.0..=1.0).contains(&noise_perlin1(x)));
        assert!((0.0..=1.0).contains(&noise_perlin2(p)));
        assert!((0.0..=1.0).contains(&noise_perlin3(p.extend(x * 0.31))));
    }
}

#[test]
fn value_noise_interpolates_lattice_hashes() {
    assert_eq!(noise_perlin1(3.0), rand_f(3.0));
    let i = Vec2::new(2.0, 7.0);
    assert!((noise_perlin2(i) - rand_v2(i)).abs() < 1e-6);
}

#[test]
fn value_noise_is_continuous() {
    let p = Vec2::new(1.37, -2.81);
    let eps = 1e-3;
    let d = (noise_perlin2(p) - noise_perlin2(p + Vec2::splat(eps))).abs();
    assert!(d < 0.05, "noise jumped by {d} over {eps}");
}
