//! Bit-exact mirrors of the host pipeline's uniform records.
//!
//! The host binds three records at fixed buffer slots plus an opaque
//! argument blob at a high slot; the layouts below match the pipeline's
//! constant-buffer packing byte for byte (16-byte matrix columns, padded
//! 3-component vectors). All fields are little-endian `f32`.
//!
//! The records are owned and refreshed by the host once per frame/per draw
//! and are read-only here; the only derived quantities this layer computes
//! are `size` (reciprocal of the inverse resolution) and `mouse`.

use crate::foundation::error::{StitchError, StitchResult};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Buffer slot carrying [`FrameUniforms`].
pub const FRAME_BUFFER_SLOT: u32 = 0;
/// Buffer slot carrying [`NodeUniforms`].
pub const NODE_BUFFER_SLOT: u32 = 1;
/// Buffer slot carrying [`PointerState`].
pub const POINTER_BUFFER_SLOT: u32 = 2;
/// Buffer slot carrying the opaque per-effect argument blob.
pub const ARG_BUFFER_SLOT: u32 = 9;

/// Texture unit of the primary "current" texture (always present).
pub const CURRENT_TEXTURE_UNIT: u32 = 0;
/// Texture unit of the secondary "other" texture.
pub const OTHER_TEXTURE_UNIT: u32 = 1;
/// Texture unit of the "base" texture used by layer effects.
pub const BASE_TEXTURE_UNIT: u32 = 2;

/// Per-frame scene record, bound at slot 0 (608 bytes).
///
/// Matrices are column-major `[f32; 16]`. Effects typically only touch
/// `inverse_resolution` and `time`; the remaining fields are carried so the
/// buffer can be decoded in place from the host's bytes.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FrameUniforms {
    /// World-to-view transform.
    pub view_transform: [f32; 16],
    /// View-to-world transform.
    pub inverse_view_transform: [f32; 16],
    /// View-to-clip transform.
    pub projection_transform: [f32; 16],
    /// World-to-clip transform.
    pub view_projection_transform: [f32; 16],
    /// View space to cube-texture space.
    pub view_to_cube_transform: [f32; 16],
    /// Previous frame's world-to-clip transform.
    pub last_frame_view_projection_transform: [f32; 16],
    /// Ambient lighting color.
    pub ambient_lighting_color: [f32; 4],
    /// Fog color.
    pub fog_color: [f32; 4],
    /// Fog parameters: `x: -1/(end-start)`, `y: 1-start*x`, `z: exponent`.
    pub fog_parameters: [f32; 3],
    _pad0: f32,
    /// Reciprocal of the viewport resolution in pixels.
    pub inverse_resolution: [f32; 2],
    /// Seconds elapsed since the first render with this shader.
    pub time: f32,
    /// Precalculated `sin(time)`.
    pub sin_time: f32,
    /// Precalculated `cos(time)`.
    pub cos_time: f32,
    /// Per-frame random value in `[0, 1]`.
    pub random01: f32,
    /// Motion blur intensity.
    pub motion_blur_intensity: f32,
    /// Environment intensity.
    pub environment_intensity: f32,
    /// Clip-to-view transform.
    pub inverse_projection_transform: [f32; 16],
    /// Clip-to-world transform.
    pub inverse_view_projection_transform: [f32; 16],
    /// Near/far clip distances.
    pub near_far: [f32; 2],
    _pad1: [f32; 2],
}

impl FrameUniforms {
    /// Decode a slot-0 buffer; the byte length must match exactly.
    pub fn from_bytes(bytes: &[u8]) -> StitchResult<&Self> {
        from_slot_bytes(bytes, FRAME_BUFFER_SLOT)
    }

    /// Viewport size in pixels: `1 / inverse_resolution`.
    pub fn size(&self) -> Vec2 {
        1.0 / Vec2::from(self.inverse_resolution)
    }

    /// Host-side helper: a zeroed record carrying only viewport and time.
    pub fn for_viewport(size: Vec2, time: f32) -> Self {
        let mut u = Self::zeroed();
        u.inverse_resolution = (1.0 / size).into();
        u.time = time;
        u.sin_time = time.sin();
        u.cos_time = time.cos();
        u
    }
}

/// Per-node record, bound at slot 1 (512 bytes).
///
/// The seven transforms are mutually consistent (inverse × forward ≈ identity
/// within float tolerance); that invariant is owned by the host. Bounding
/// boxes are min/max corner pairs stored as padded 3-component columns.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct NodeUniforms {
    /// Model-to-world transform.
    pub model_transform: [f32; 16],
    /// World-to-model transform.
    pub inverse_model_transform: [f32; 16],
    /// Model-to-view transform.
    pub model_view_transform: [f32; 16],
    /// View-to-model transform.
    pub inverse_model_view_transform: [f32; 16],
    /// Inverse transpose of the model-view transform.
    pub normal_transform: [f32; 16],
    /// Model-to-clip transform.
    pub model_view_projection_transform: [f32; 16],
    /// Clip-to-model transform.
    pub inverse_model_view_projection_transform: [f32; 16],
    bounding_box_min: [f32; 3],
    _pad0: f32,
    bounding_box_max: [f32; 3],
    _pad1: f32,
    world_bounding_box_min: [f32; 3],
    _pad2: f32,
    world_bounding_box_max: [f32; 3],
    _pad3: f32,
}

impl NodeUniforms {
    /// Decode a slot-1 buffer; the byte length must match exactly.
    pub fn from_bytes(bytes: &[u8]) -> StitchResult<&Self> {
        from_slot_bytes(bytes, NODE_BUFFER_SLOT)
    }

    /// Model-to-world transform as a matrix.
    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array(&self.model_transform)
    }

    /// World-to-model transform as a matrix.
    pub fn inverse_model(&self) -> Mat4 {
        Mat4::from_cols_array(&self.inverse_model_transform)
    }

    /// Model-to-clip transform as a matrix.
    pub fn model_view_projection(&self) -> Mat4 {
        Mat4::from_cols_array(&self.model_view_projection_transform)
    }

    /// Local-space bounding box as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        (self.bounding_box_min.into(), self.bounding_box_max.into())
    }

    /// World-space bounding box as `(min, max)` corners.
    pub fn world_bounding_box(&self) -> (Vec3, Vec3) {
        (
            self.world_bounding_box_min.into(),
            self.world_bounding_box_max.into(),
        )
    }

    /// Host-side helper: identity transforms and the given local box.
    pub fn identity_with_box(bb_min: Vec3, bb_max: Vec3) -> Self {
        let identity = Mat4::IDENTITY.to_cols_array();
        let mut u = Self::zeroed();
        u.model_transform = identity;
        u.inverse_model_transform = identity;
        u.model_view_transform = identity;
        u.inverse_model_view_transform = identity;
        u.normal_transform = identity;
        u.model_view_projection_transform = identity;
        u.inverse_model_view_projection_transform = identity;
        u.bounding_box_min = bb_min.into();
        u.bounding_box_max = bb_max.into();
        u.world_bounding_box_min = bb_min.into();
        u.world_bounding_box_max = bb_max.into();
        u
    }
}

/// Pointer/viewport record, bound at slot 2 (16 bytes).
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PointerState {
    /// Pointer position in viewport space.
    pub mouse: [f32; 2],
    /// Viewport size in pixels.
    pub viewport_size: [f32; 2],
}

impl PointerState {
    /// Build a pointer record.
    pub fn new(mouse: Vec2, viewport_size: Vec2) -> Self {
        Self {
            mouse: mouse.into(),
            viewport_size: viewport_size.into(),
        }
    }

    /// Decode a slot-2 buffer; the byte length must match exactly.
    pub fn from_bytes(bytes: &[u8]) -> StitchResult<&Self> {
        from_slot_bytes(bytes, POINTER_BUFFER_SLOT)
    }

    /// Pointer position as a vector.
    pub fn mouse(&self) -> Vec2 {
        Vec2::from(self.mouse)
    }
}

fn from_slot_bytes<T: Pod>(bytes: &[u8], slot: u32) -> StitchResult<&T> {
    bytemuck::try_from_bytes(bytes).map_err(|e| {
        StitchError::binding(format!(
            "buffer at slot {slot}: expected {} bytes, got {} ({e})",
            std::mem::size_of::<T>(),
            bytes.len()
        ))
    })
}

#[cfg(test)]
#[path = "../tests/unit/uniform.rs"]
mod tests;
