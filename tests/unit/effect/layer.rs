use super::*;

#[test]
fn offset_table_follows_the_inverse_resolution() {
    let tex = Texture::solid(8, 4, Vec4::ONE).unwrap();
    let inv = Vec2::new(1.0 / 800.0, 1.0 / 600.0);
    let layer = Layer::for_viewport(&tex, inv);

    assert_eq!(layer.info[0], Vec2::new(inv.x, 0.0));
    assert_eq!(layer.info[1], Vec2::new(0.0, inv.y));
    assert_eq!(layer.info[2], Vec2::ZERO);
    assert_eq!(layer.info[3], 0.5 * inv);
    assert_eq!(layer.info[4], Vec2::ONE - 0.5 * inv);
}

#[test]
fn single_texel_steps_compose() {
    let tex = Texture::solid(2, 2, Vec4::ONE).unwrap();
    let inv = Vec2::new(0.25, 0.125);
    let layer = Layer::for_viewport(&tex, inv);
    // One step right plus one step down is the diagonal texel offset.
    assert_eq!(layer.info[0] + layer.info[1], inv);
    assert_eq!(layer.info[2], Vec2::ZERO);
}

#[test]
fn sample_clamps_into_the_inset_bounds() {
    let tex = Texture::from_fn(4, 4, |x, y| Vec4::new(x as f32, y as f32, 0.0, 1.0)).unwrap();
    let layer = Layer::for_viewport(&tex, Vec2::splat(0.25));

    // Clamped corners resolve to the corner texels exactly.
    assert_eq!(layer.sample(Vec2::new(-5.0, -5.0)), tex.read(0, 0));
    assert_eq!(layer.sample(Vec2::new(9.0, 9.0)), tex.read(3, 3));
    // In-bounds coordinates are untouched.
    let uv = Vec2::new(1.5 / 4.0, 2.5 / 4.0);
    assert_eq!(layer.sample(uv), tex.sample(uv));
}
