//! The effect adapter framework.
//!
//! A user writes one per-pixel function; an [`EffectAdapter`] binds it to the
//! host pipeline's fragment contract as three distinct entry points:
//!
//! - the **private implementation**, the user function value itself;
//! - the **stitchable callable**, a thin forwarding shim with the fixed
//!   per-kind calling convention and no logic of its own;
//! - the **fragment wrapper**, the only place uniform extraction happens. It
//!   decodes the slot-0 and slot-2 buffers, derives `size`, `mouse` and
//!   `time`, samples or builds the per-kind input, invokes the stitchable
//!   callable and post-processes the result into the pipeline output.
//!
//! The slot-9 argument blob travels byte-for-byte from the wrapper through
//! the callable into the user function; nothing in this module reads it.
//!
//! Entry-point names are derived from the effect name by fixed suffixing and
//! are part of the external contract for tooling that discovers effects by
//! name (see [`EffectRegistry`](registry::EffectRegistry)).

pub mod registry;

mod layer;

pub use layer::Layer;

use crate::foundation::error::{StitchError, StitchResult};
use crate::math::trig::modulo2;
use crate::texture::Texture;
use crate::uniform::{FrameUniforms, PointerState};
use bytemuck::Pod;
use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Argument-size value passed to stitchable callables on the fixed pipeline
/// path. An opaque host convention; user functions treat it as a marker, not
/// a length.
pub const ARG_SIZE_SENTINEL: i32 = 90909;

/// The three effect kinds the pipeline can stitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Transforms the pixel's current color.
    Color,
    /// Composites over a base layer with multi-tap access.
    Layer,
    /// Produces a sampling offset instead of a color.
    Distortion,
}

impl EffectKind {
    fn fragment_suffix(self) -> &'static str {
        match self {
            Self::Color => "_ColorFragment",
            Self::Layer => "_LayerFragment",
            Self::Distortion => "_DistortFragment",
        }
    }

    fn private_suffix(self) -> &'static str {
        match self {
            Self::Color => "_private",
            Self::Layer => "_LayerPrivate",
            Self::Distortion => "_DistortPrivate",
        }
    }
}

/// Name and kind of one user effect; everything else is derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// The user-chosen effect name, also the stitchable entry-point name.
    pub name: String,
    /// Which calling convention the effect uses.
    pub kind: EffectKind,
}

/// Interpolated per-pixel inputs, mirroring the host vertex-out contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentIn {
    /// Pixel-space position (pixel centers at half-integer coordinates).
    pub position: Vec2,
    /// Interpolated vertex color.
    pub color: Vec4,
    /// Normalized texture coordinates for this pixel.
    pub tex_coords: Vec2,
    /// Interpolated surface normal.
    pub normal: Vec3,
}

impl FragmentIn {
    /// Fragment input for the pixel at `position` in a `size` viewport,
    /// with white vertex color and a z-facing normal.
    pub fn at(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            color: Vec4::ONE,
            tex_coords: position / size,
            normal: Vec3::Z,
        }
    }
}

/// The per-dispatch binding table: raw uniform buffers and texture units.
///
/// Buffer slices are the host's bytes, decoded lazily by the fragment
/// wrapper; the argument blob defaults to empty and is never retained past a
/// call. The base texture is only consulted by layer effects.
#[derive(Clone, Copy, Debug)]
pub struct Bindings<'a> {
    /// Slot-0 frame uniform bytes.
    pub frame: &'a [u8],
    /// Slot-1 node uniform bytes.
    pub node: &'a [u8],
    /// Slot-2 pointer state bytes.
    pub pointer: &'a [u8],
    /// Slot-9 opaque argument blob.
    pub args: &'a [u8],
    /// Texture unit 0: the current color texture.
    pub current: &'a Texture,
    /// Texture unit 1: the secondary texture handed to user functions.
    pub other: Option<&'a Texture>,
    /// Texture unit 2: the base texture for layer effects.
    pub base: Option<&'a Texture>,
}

impl<'a> Bindings<'a> {
    /// Bindings with only the mandatory slots filled.
    pub fn new(frame: &'a [u8], pointer: &'a [u8], current: &'a Texture) -> Self {
        Self {
            frame,
            node: &[],
            pointer,
            args: &[],
            current,
            other: None,
            base: None,
        }
    }

    /// Attach a slot-9 argument blob.
    pub fn with_args(mut self, args: &'a [u8]) -> Self {
        self.args = args;
        self
    }

    /// Attach the unit-1 secondary texture.
    pub fn with_other(mut self, other: &'a Texture) -> Self {
        self.other = Some(other);
        self
    }

    /// Attach the unit-2 base texture.
    pub fn with_base(mut self, base: &'a Texture) -> Self {
        self.base = Some(base);
        self
    }

    fn secondary(&self) -> &'a Texture {
        self.other.unwrap_or(self.current)
    }
}

/// View a `Pod` value as the byte blob the host binds at slot 9.
pub fn arg_bytes<T: Pod>(value: &T) -> &[u8] {
    bytemuck::bytes_of(value)
}

/// A color effect: per-pixel color in, color out.
pub struct ColorEffect {
    name: String,
    body: Box<
        dyn Fn(Vec2, Vec4, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec4 + Send + Sync,
    >,
}

impl ColorEffect {
    /// The private implementation: the user function, called directly.
    #[allow(clippy::too_many_arguments)]
    pub fn private(
        &self,
        position: Vec2,
        current: Vec4,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec4 {
        (self.body)(position, current, time, size, mouse, tex, arg, arg_size)
    }

    /// The stitchable callable: forwards byte-for-byte to the private
    /// implementation.
    #[allow(clippy::too_many_arguments)]
    pub fn stitchable(
        &self,
        position: Vec2,
        current: Vec4,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec4 {
        self.private(position, current, time, size, mouse, tex, arg, arg_size)
    }
}

/// A layer effect: composites over a base texture with multi-tap access.
pub struct LayerEffect {
    name: String,
    body: Box<
        dyn Fn(Vec2, Layer<'_>, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec4 + Send + Sync,
    >,
}

impl LayerEffect {
    /// The private implementation: the user function, called directly.
    #[allow(clippy::too_many_arguments)]
    pub fn private(
        &self,
        position: Vec2,
        layer: Layer<'_>,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec4 {
        (self.body)(position, layer, time, size, mouse, tex, arg, arg_size)
    }

    /// The stitchable callable: forwards byte-for-byte to the private
    /// implementation.
    #[allow(clippy::too_many_arguments)]
    pub fn stitchable(
        &self,
        position: Vec2,
        layer: Layer<'_>,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec4 {
        self.private(position, layer, time, size, mouse, tex, arg, arg_size)
    }
}

/// A distortion effect: yields a sampling offset instead of a color.
pub struct DistortionEffect {
    name: String,
    body: Box<dyn Fn(Vec2, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec2 + Send + Sync>,
}

impl DistortionEffect {
    /// The private implementation: the user function, called directly.
    #[allow(clippy::too_many_arguments)]
    pub fn private(
        &self,
        position: Vec2,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec2 {
        (self.body)(position, time, size, mouse, tex, arg, arg_size)
    }

    /// The stitchable callable: forwards byte-for-byte to the private
    /// implementation.
    #[allow(clippy::too_many_arguments)]
    pub fn stitchable(
        &self,
        position: Vec2,
        time: f32,
        size: Vec2,
        mouse: Vec2,
        tex: &Texture,
        arg: &[u8],
        arg_size: i32,
    ) -> Vec2 {
        self.private(position, time, size, mouse, tex, arg, arg_size)
    }
}

/// A user effect bound to the pipeline contract.
///
/// The variant fixes the calling convention at the type level; a user
/// function with the wrong signature fails to compile rather than being
/// coerced.
pub enum EffectAdapter {
    /// A [`ColorEffect`].
    Color(ColorEffect),
    /// A [`LayerEffect`].
    Layer(LayerEffect),
    /// A [`DistortionEffect`].
    Distortion(DistortionEffect),
}

impl EffectAdapter {
    /// Adapt a color function.
    pub fn color<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec2, Vec4, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec4 + Send + Sync + 'static,
    {
        Self::Color(ColorEffect {
            name: name.into(),
            body: Box::new(f),
        })
    }

    /// Adapt a layer function.
    pub fn layer<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec2, Layer<'_>, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec4
            + Send
            + Sync
            + 'static,
    {
        Self::Layer(LayerEffect {
            name: name.into(),
            body: Box::new(f),
        })
    }

    /// Adapt a distortion function.
    pub fn distortion<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec2, f32, Vec2, Vec2, &Texture, &[u8], i32) -> Vec2 + Send + Sync + 'static,
    {
        Self::Distortion(DistortionEffect {
            name: name.into(),
            body: Box::new(f),
        })
    }

    /// The user-chosen effect name.
    pub fn name(&self) -> &str {
        match self {
            Self::Color(e) => &e.name,
            Self::Layer(e) => &e.name,
            Self::Distortion(e) => &e.name,
        }
    }

    /// The effect's kind.
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Color(_) => EffectKind::Color,
            Self::Layer(_) => EffectKind::Layer,
            Self::Distortion(_) => EffectKind::Distortion,
        }
    }

    /// Name and kind, as discovered by manifest tooling.
    pub fn descriptor(&self) -> EffectDescriptor {
        EffectDescriptor {
            name: self.name().to_owned(),
            kind: self.kind(),
        }
    }

    /// Entry-point name of the stitchable callable (the effect name itself).
    pub fn stitchable_name(&self) -> String {
        self.name().to_owned()
    }

    /// Entry-point name of the fragment wrapper.
    pub fn fragment_name(&self) -> String {
        format!("{}{}", self.name(), self.kind().fragment_suffix())
    }

    /// Entry-point name of the private implementation.
    pub fn private_name(&self) -> String {
        format!("{}{}", self.name(), self.kind().private_suffix())
    }

    /// The fragment wrapper: decode uniforms, build per-kind inputs, invoke
    /// the stitchable callable and post-process into the pipeline output.
    pub fn fragment(&self, frag: &FragmentIn, bindings: &Bindings<'_>) -> StitchResult<Vec4> {
        let frame = FrameUniforms::from_bytes(bindings.frame)?;
        let pointer = PointerState::from_bytes(bindings.pointer)?;
        let size = frame.size();
        let mouse = pointer.mouse();
        let time = frame.time;
        let tex = bindings.secondary();

        match self {
            Self::Color(e) => {
                let current = bindings.current.sample(frag.tex_coords);
                Ok(e.stitchable(
                    frag.position,
                    current,
                    time,
                    size,
                    mouse,
                    tex,
                    bindings.args,
                    ARG_SIZE_SENTINEL,
                ))
            }
            Self::Layer(e) => {
                let base = bindings.base.ok_or_else(|| {
                    StitchError::binding(format!(
                        "layer effect '{}' requires a base texture at unit 2",
                        e.name
                    ))
                })?;
                let layer = Layer::for_viewport(base, Vec2::from(frame.inverse_resolution));
                Ok(e.stitchable(
                    frag.position,
                    layer,
                    time,
                    size,
                    mouse,
                    tex,
                    bindings.args,
                    ARG_SIZE_SENTINEL,
                ))
            }
            Self::Distortion(e) => {
                let offset = e.stitchable(
                    frag.position,
                    time,
                    size,
                    mouse,
                    tex,
                    bindings.args,
                    ARG_SIZE_SENTINEL,
                );
                // Offsets are relative to the pixel's own position and wrap
                // with a true modulo, so a zero offset is the identity.
                let coord = modulo2(frag.position + offset, size);
                Ok(bindings.current.read(coord.x.floor() as i64, coord.y.floor() as i64))
            }
        }
    }
}

impl std::fmt::Debug for EffectAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectAdapter")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/adapter.rs"]
mod tests;
