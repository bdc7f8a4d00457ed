//! Snowfield Engine Library
//!
//! A deformable snow surface: a persistent height field that world-space
//! contact points (player feet, mouse picks) permanently imprint
//! depressions into, plus the rendering scaffolding to display it.
//!
//! # Modules
//!
//! - [`field`] - Height-field core: deformation state, stamp compositing,
//!   world-to-texture coordinate mapping, and the surface bounds publisher
//! - [`render`] - Snow plane mesh, GPU texture mirror, shader uniforms, and
//!   headless device acquisition
//!
//! # Example
//!
//! ```ignore
//! use snowfield_engine::field::{HeightField, SurfaceTransform};
//! use glam::Vec3;
//!
//! // A 512x512 field over a 10m x 10m surface centered at the origin.
//! let mut field = HeightField::initialized(512);
//! let transform = SurfaceTransform {
//!     scale: Vec3::new(10.0, 1.0, 10.0),
//!     ..Default::default()
//! };
//!
//! // A footstep compresses the snow under it.
//! field.stamp_world(Vec3::new(1.0, 0.0, -2.0), 0.5, 0.05, &transform)?;
//!
//! // The renderer samples the result each frame.
//! let view = field.sample()?;
//! let depth = view.bilinear(0.6, 0.3);
//! ```

pub mod field;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core types at crate level for convenience
pub use field::{
    BoundsSnapshot, FieldError, FieldView, HeightField, Stamp, SurfaceBoundsPublisher,
    SurfaceTransform, WorldBounds,
};
pub use render::{HeightFieldTexture, SnowUniforms, generate_snow_grid};
