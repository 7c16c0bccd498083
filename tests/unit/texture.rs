use super::*;

fn checker2x2() -> Texture {
    Texture::from_texels(
        2,
        2,
        vec![
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
            Vec4::new(1.0, 1.0, 1.0, 1.0),
        ],
    )
    .unwrap()
}

#[test]
fn construction_validates_dimensions() {
    assert!(Texture::from_texels(0, 4, vec![]).is_err());
    assert!(Texture::from_texels(4, 0, vec![]).is_err());
    let err = Texture::from_texels(2, 2, vec![Vec4::ZERO; 3]).unwrap_err();
    assert!(matches!(err, StitchError::Validation(_)));
}

#[test]
fn solid_fills_every_texel() {
    let c = Vec4::new(0.2, 0.4, 0.6, 1.0);
    let t = Texture::solid(3, 2, c).unwrap();
    assert_eq!(t.size(), Vec2::new(3.0, 2.0));
    assert!(t.texels().iter().all(|&v| v == c));
}

#[test]
fn from_fn_sees_texel_coordinates() {
    let t = Texture::from_fn(4, 3, |x, y| Vec4::new(x as f32, y as f32, 0.0, 1.0)).unwrap();
    assert_eq!(t.read(2, 1), Vec4::new(2.0, 1.0, 0.0, 1.0));
    assert_eq!(t.read(3, 2), Vec4::new(3.0, 2.0, 0.0, 1.0));
}

#[test]
fn read_clamps_to_bounds() {
    let t = checker2x2();
    assert_eq!(t.read(-5, 0), t.read(0, 0));
    assert_eq!(t.read(0, -1), t.read(0, 0));
    assert_eq!(t.read(7, 1), t.read(1, 1));
    assert_eq!(t.read(1, 9), t.read(1, 1));
}

#[test]
fn sampling_texel_centers_is_exact() {
    let t = checker2x2();
    for y in 0..2i64 {
        for x in 0..2i64 {
            let uv = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) / t.size();
            assert_eq!(t.sample(uv), t.read(x, y));
        }
    }
}

#[test]
fn sampling_between_centers_blends() {
    let t = checker2x2();
    // Horizontal midpoint of the top row blends red and green equally.
    let mid = t.sample(Vec2::new(0.5, 0.25));
    assert!((mid - Vec4::new(0.5, 0.5, 0.0, 1.0)).length() < 1e-5);
    // Dead center of the texture averages all four texels.
    let center = t.sample(Vec2::splat(0.5));
    assert!((center - Vec4::new(0.5, 0.5, 0.5, 1.0)).length() < 1e-5);
}

#[test]
fn sampling_clamps_to_the_edge() {
    let t = checker2x2();
    assert_eq!(t.sample(Vec2::new(-1.0, -1.0)), t.read(0, 0));
    assert_eq!(t.sample(Vec2::new(2.0, 2.0)), t.read(1, 1));
    assert_eq!(t.sample(Vec2::new(0.25, -3.0)), t.read(0, 0));
}

#[test]
fn rgba8_round_trip() {
    let bytes = [255u8, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 0];
    let t = Texture::from_rgba8(2, 2, &bytes).unwrap();
    assert_eq!(t.read(0, 0), Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(t.read(1, 1), Vec4::new(1.0, 1.0, 1.0, 0.0));

    let img = t.to_rgba8();
    assert_eq!(img.as_raw().as_slice(), &bytes);
}

#[test]
fn from_rgba8_validates_length() {
    assert!(Texture::from_rgba8(2, 2, &[0u8; 15]).is_err());
}

#[test]
fn from_image_bytes_decodes_png() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    let mut png = std::io::Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png).unwrap();

    let t = Texture::from_image_bytes(png.get_ref()).unwrap();
    assert_eq!((t.width(), t.height()), (3, 2));
    let expected = Vec4::new(10.0, 20.0, 30.0, 255.0) / 255.0;
    assert!((t.read(1, 1) - expected).length() < 1e-5);
}

#[test]
fn from_image_bytes_rejects_garbage() {
    let err = Texture::from_image_bytes(&[1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, StitchError::Validation(_)));
}
