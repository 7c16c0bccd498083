use super::*;

fn vec2_close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn vec3_close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn rot2d_zero_is_identity() {
    let m = rot2d(0.0);
    assert!(vec2_close(m * Vec2::X, Vec2::X));
    assert!(vec2_close(m * Vec2::Y, Vec2::Y));
}

#[test]
fn rot2d_quarter_turn_maps_x_to_y() {
    let m = rot2d(PI / 2.0);
    assert!(vec2_close(m * Vec2::X, Vec2::Y));
    assert!(vec2_close(m * Vec2::Y, -Vec2::X));
}

#[test]
fn rot2d_pi_counts_half_turns() {
    let p = Vec2::new(0.3, -0.7);
    assert!(vec2_close(rot2d_pi(1.0) * p, rot2d(PI) * p));
    assert!(vec2_close(rot2d_pi(0.5) * p, rot2d(PI / 2.0) * p));
}

#[test]
fn rot2d_inverts_with_the_negated_angle() {
    for angle in [-3.0, 0.0, 0.9, 2.4] {
        let r = rot2d(angle) * rot2d(-angle);
        assert!(vec2_close(r.col(0), Vec2::X));
        assert!(vec2_close(r.col(1), Vec2::Y));
    }
}

#[test]
fn rot2d_preserves_length_and_orientation() {
    for angle in [-2.0, 0.1, 1.0, 4.0] {
        let m = rot2d(angle);
        assert!((m.determinant() - 1.0).abs() < 1e-5);
        let v = m * Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-4);
    }
}

#[test]
fn rotate_about_z_matches_rot_z() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    for angle in [0.0, 0.7, -2.1] {
        assert!(vec3_close(rotate(Vec3::Z, angle) * p, rot_z(angle) * p));
    }
}

#[test]
fn rotate_normalizes_the_axis() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let a = rotate(Vec3::new(0.0, 0.0, 10.0), 0.9) * p;
    let b = rotate(Vec3::Z, 0.9) * p;
    assert!(vec3_close(a, b));
}

#[test]
fn axis_rotations_fix_their_axis() {
    assert!(vec3_close(rot_x(1.3) * Vec3::X, Vec3::X));
    assert!(vec3_close(rot_y(1.3) * Vec3::Y, Vec3::Y));
    assert!(vec3_close(rot_z(1.3) * Vec3::Z, Vec3::Z));
}

#[test]
fn make_mat_packs_column_major() {
    let m = make_mat(Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(m.col(0), Vec2::new(1.0, 2.0));
    assert_eq!(m.col(1), Vec2::new(3.0, 4.0));
}

#[test]
fn inverses_round_trip() {
    let m2 = Mat2::from_cols(Vec2::new(2.0, 1.0), Vec2::new(0.5, 3.0));
    let r2 = m2 * inverse2(m2);
    assert!(vec2_close(r2.col(0), Vec2::X));
    assert!(vec2_close(r2.col(1), Vec2::Y));

    let m3 = Mat3::from_rotation_y(0.8) * Mat3::from_diagonal(Vec3::new(2.0, 3.0, 0.5));
    let r3 = m3 * inverse3(m3);
    assert!(vec3_close(r3.col(0), Vec3::X));
    assert!(vec3_close(r3.col(2), Vec3::Z));

    let m4 = Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0)) * Mat4::from_rotation_x(0.4);
    let r4 = m4 * inverse4(m4);
    assert!((r4.col(3) - Vec4::W).length() < 1e-4);
}
