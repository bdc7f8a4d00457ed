//! Render Module
//!
//! GPU-facing half of the snowfield engine: the snow plane mesh, the height
//! field texture mirror, the surface shader's uniform block, and headless
//! device acquisition. The field module stays authoritative for deformation
//! state; everything here only displays it.

pub mod gpu_context;
pub mod height_texture;
pub mod snow_mesh;
pub mod uniforms;

/// WGSL source for the snow surface shader.
pub const SNOW_SURFACE_SHADER: &str = include_str!("shaders/snow_surface.wgsl");

// Re-export commonly used types for convenience
pub use gpu_context::HeadlessGpu;
pub use height_texture::HeightFieldTexture;
pub use snow_mesh::{SnowMesh, SnowVertex, generate_snow_grid};
pub use uniforms::SnowUniforms;
