use super::*;
use crate::uniform::{FrameUniforms, PointerState};
use bytemuck::bytes_of;

fn bindings_for<'a>(
    frame: &'a FrameUniforms,
    pointer: &'a PointerState,
    tex: &'a Texture,
) -> Bindings<'a> {
    Bindings::new(bytes_of(frame), bytes_of(pointer), tex)
}

#[test]
fn zero_viewports_are_rejected() {
    let tex = Texture::solid(1, 1, Vec4::ONE).unwrap();
    let frame = FrameUniforms::for_viewport(Vec2::ONE, 0.0);
    let pointer = PointerState::new(Vec2::ZERO, Vec2::ONE);
    let bindings = bindings_for(&frame, &pointer, &tex);
    let identity = EffectAdapter::color("Identity", |_, c, _, _, _, _, _, _| c);

    assert!(render_fragment(&identity, &bindings, 0, 4).is_err());
    assert!(render_fragment(&identity, &bindings, 4, 0).is_err());
}

#[test]
fn pixels_are_evaluated_at_half_integer_centers() {
    let size = Vec2::new(3.0, 2.0);
    let tex = Texture::solid(3, 2, Vec4::ONE).unwrap();
    let frame = FrameUniforms::for_viewport(size, 0.0);
    let pointer = PointerState::new(Vec2::ZERO, size);
    let bindings = bindings_for(&frame, &pointer, &tex);

    let probe = EffectAdapter::color("Pos", |pos, _, _, _, _, _, _, _| {
        Vec4::new(pos.x, pos.y, 0.0, 1.0)
    });
    let out = render_fragment(&probe, &bindings, 3, 2).unwrap();
    assert_eq!(out.texel(0, 0), Vec4::new(0.5, 0.5, 0.0, 1.0));
    assert_eq!(out.texel(2, 1), Vec4::new(2.5, 1.5, 0.0, 1.0));
}

#[test]
fn output_is_row_major() {
    let size = Vec2::new(2.0, 2.0);
    let tex = Texture::solid(2, 2, Vec4::ONE).unwrap();
    let frame = FrameUniforms::for_viewport(size, 0.0);
    let pointer = PointerState::new(Vec2::ZERO, size);
    let bindings = bindings_for(&frame, &pointer, &tex);

    let probe = EffectAdapter::color("Idx", |pos, _, _, _, _, _, _, _| {
        Vec4::splat((pos.y - 0.5) * 2.0 + (pos.x - 0.5))
    });
    let out = render_fragment(&probe, &bindings, 2, 2).unwrap();
    assert_eq!(
        out.texels.iter().map(|t| t.x).collect::<Vec<_>>(),
        vec![0.0, 1.0, 2.0, 3.0]
    );
}

#[test]
fn per_pixel_errors_abort_the_dispatch() {
    let tex = Texture::solid(2, 2, Vec4::ONE).unwrap();
    let pointer = PointerState::new(Vec2::ZERO, Vec2::splat(2.0));
    // A truncated frame buffer fails inside every fragment invocation.
    let bindings = Bindings::new(&[0u8; 4], bytes_of(&pointer), &tex);
    let identity = EffectAdapter::color("Identity", |_, c, _, _, _, _, _, _| c);

    let err = render_fragment(&identity, &bindings, 2, 2).unwrap_err();
    assert!(matches!(err, StitchError::Binding(_)));
}

#[test]
fn frame_converts_to_rgba8_and_texture() {
    let size = Vec2::new(2.0, 1.0);
    let tex = Texture::solid(2, 1, Vec4::new(1.0, 0.5, 0.0, 1.0)).unwrap();
    let frame = FrameUniforms::for_viewport(size, 0.0);
    let pointer = PointerState::new(Vec2::ZERO, size);
    let bindings = bindings_for(&frame, &pointer, &tex);

    let identity = EffectAdapter::color("Identity", |_, c, _, _, _, _, _, _| c);
    let out = render_fragment(&identity, &bindings, 2, 1).unwrap();

    let img = out.to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 128, 0, 255]);

    let back = out.into_texture().unwrap();
    assert_eq!(back.read(1, 0), Vec4::new(1.0, 0.5, 0.0, 1.0));
}
