//! Uniform Structs for the Snow Surface Shader
//!
//! GPU-compatible uniform buffer structures that must match the WGSL layout
//! exactly.

use crate::field::BoundsSnapshot;

/// Uniform block for `snow_surface.wgsl`.
/// Must match the WGSL struct layout exactly!
///
/// WGSL layout (112 bytes total):
///   offset   0: view_proj (mat4x4<f32>)   = 64 bytes
///   offset  64: min_world_y (f32)         = 4 bytes
///   offset  68: max_world_y (f32)         = 4 bytes
///   offset  72: displacement (f32)        = 4 bytes
///   offset  76: field_resolution (f32)    = 4 bytes
///   offset  80: snow_color (vec3<f32>)    = 12 bytes (vec3 aligned to 16)
///   offset  92: _pad0 (f32)               = 4 bytes
///   offset  96: ground_color (vec3<f32>)  = 12 bytes
///   offset 108: _pad1 (f32)               = 4 bytes
///   Total: 112 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SnowUniforms {
    /// Combined view-projection matrix (column-major).
    pub view_proj: [[f32; 4]; 4],
    /// Bottom of the published vertical band (from the bounds publisher).
    pub min_world_y: f32,
    /// Top of the published vertical band.
    pub max_world_y: f32,
    /// World-space height of undisturbed snow above the base plane.
    pub displacement: f32,
    /// Height field resolution, as a float for the shader.
    pub field_resolution: f32,
    /// Tint of undisturbed snow.
    pub snow_color: [f32; 3],
    pub _pad0: f32,
    /// Tint of fully compressed ground.
    pub ground_color: [f32; 3],
    pub _pad1: f32,
}

static_assertions::assert_eq_size!(SnowUniforms, [u8; 112]);

impl Default for SnowUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            min_world_y: 0.0,
            max_world_y: 1.0,
            displacement: 1.0,
            field_resolution: 512.0,
            snow_color: [0.98, 0.98, 1.0],
            _pad0: 0.0,
            ground_color: [0.35, 0.30, 0.25],
            _pad1: 0.0,
        }
    }
}

impl SnowUniforms {
    /// Copy a published bounds snapshot into the uniform block.
    pub fn set_bounds(&mut self, snapshot: &BoundsSnapshot) {
        self.min_world_y = snapshot.min_world_y;
        self.max_world_y = snapshot.max_world_y;
    }

    /// Set the view-projection matrix.
    pub fn set_view_proj(&mut self, view_proj: glam::Mat4) {
        self.view_proj = view_proj.to_cols_array_2d();
    }

    /// Set the displacement scale (world height of full snow).
    pub fn set_displacement(&mut self, displacement: f32) {
        self.displacement = displacement;
    }

    /// Record the height field resolution for texel-space math in the shader.
    pub fn set_field_resolution(&mut self, resolution: usize) {
        self.field_resolution = resolution as f32;
    }
}
