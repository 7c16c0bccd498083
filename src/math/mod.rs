//! The primitive math library: pure, stateless functions over `glam` f32
//! vectors and matrices.
//!
//! Everything here is a deterministic function of its inputs. Hash and noise
//! functions carry no seeded global state; the same input always produces the
//! same output, which is what keeps effects reproducible across frames and
//! devices.
//!
//! Half-precision inputs from the original shading surface are represented as
//! `f32` here; the color round-trip guarantees in [`color`] hold at single
//! precision.

pub mod blend;
pub mod color;
pub mod coords;
pub mod fbm;
pub mod noise;
pub mod rot;
pub mod sdf;
pub mod trig;

pub use blend::{comm_smax, comm_smin, exp_smax, exp_smin, poly_smax, poly_smin};
pub use color::{
    blackbody, gamma_decode, gamma_decode4, gamma_encode, gamma_encode4, grayscale, hsl2rgb,
    hsv2rgb, luminance, opaque1, opaque3, opaque4, opaque_rgb, palette, prod2, prod3, prod4,
    rgb2hsl, rgb2hsv, vignette,
};
pub use coords::{
    hex_edge_dist, hex_grid, hex_to_pix, node_aspect, pix_to_hex, to_world, world_coord,
    world_coord_adjusted, yflip,
};
pub use fbm::Fbm;
pub use noise::{
    hash4, interporand, interporand_256, noise_perlin1, noise_perlin2, noise_perlin3, prand,
    prand2, prand3, prand4, rand2, rand3, rand4, rand_f, rand_v2, rand_v3,
};
pub use rot::{inverse2, inverse3, inverse4, make_mat, rot2d, rot2d_pi, rot_x, rot_y, rot_z, rotate};
pub use sdf::{
    op_rep, sd_box, sd_circle, sd_circle_at, sd_intersect, sd_plane, sd_plane_n, sd_segment,
    sd_sphere, sd_sphere_at, sd_subtract, sd_torus, sd_torus_at, sd_triangle, sd_union,
};
pub use trig::{fix_atan2, fix_cos, fix_sin, modulo, modulo2};
