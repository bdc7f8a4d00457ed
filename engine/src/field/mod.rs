//! Snow Field Module
//!
//! The deformable height-field core: persistent per-cell snow depth,
//! point-stamp compositing, world-to-texture coordinate mapping, and the
//! surface bounds publisher. Everything in here is CPU-side and owns its
//! buffers; the render module mirrors the result onto the GPU.

pub mod bounds;
pub mod compositor;
pub mod coords;
pub mod debug_export;
pub mod height_field;

// Re-export commonly used types for convenience
pub use bounds::{BoundsSnapshot, MIN_VERTICAL_EXTENT, SurfaceBoundsPublisher, WorldBounds};
pub use compositor::{Stamp, composite_stamp};
pub use coords::{MIN_SCALE, SurfaceTransform, to_normalized, to_normalized_radius};
pub use debug_export::{save_png, to_gray_image};
pub use height_field::{FULL_SNOW, FieldError, FieldView, HeightField};
