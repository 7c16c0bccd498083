//! Stitchfx turns a single user-written per-pixel function into the three
//! cooperating entry points a host rendering pipeline expects.
//!
//! The crate has two halves:
//!
//! - A pure math library ([`math`]) of signed distance fields, smooth blends,
//!   rotation builders, color-space conversions, hash/noise generators and a
//!   fractal-noise accumulator, usable from any effect function.
//! - An effect adapter framework ([`effect`]) that binds a user function to
//!   the pipeline's fragment-shader contract: per effect you get a stitchable
//!   callable, a fragment wrapper that extracts uniforms from raw pipeline
//!   buffers, and the private implementation itself.
//!
//! Uniform buffer layouts ([`uniform`]) are bit-exact mirrors of the host
//! records; textures ([`texture`]) are CPU-resident RGBA float images with
//! the pipeline's sampling semantics, so the whole contract is executable
//! and testable without a GPU.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Full-viewport data-parallel execution of generated fragment entry points.
pub mod dispatch;
/// The effect adapter framework: kinds, adapters, layer info, registry.
pub mod effect;
/// Distance fields, blends, rotations, colors, noise, fBm, coordinates.
pub mod math;
/// CPU textures with clamp-to-edge bilinear sampling and texel reads.
pub mod texture;
/// Bit-exact uniform buffer layouts and binding slot constants.
pub mod uniform;

pub use crate::foundation::constants;
pub use crate::foundation::error::{StitchError, StitchResult};

pub use crate::dispatch::{Frame, render_fragment};
pub use crate::effect::{
    ARG_SIZE_SENTINEL, Bindings, ColorEffect, DistortionEffect, EffectAdapter, EffectDescriptor,
    EffectKind, FragmentIn, Layer, LayerEffect, arg_bytes,
};
pub use crate::effect::registry::EffectRegistry;
pub use crate::texture::Texture;
pub use crate::uniform::{FrameUniforms, NodeUniforms, PointerState};
