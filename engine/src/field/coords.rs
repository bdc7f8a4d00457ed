//! Coordinate Mapper
//!
//! Converts world-space contact points and effect radii into the height
//! field's normalized texture space, given the surface's placement in the
//! scene (origin, orientation, non-uniform scale). Stateless; the transform
//! is supplied per call and never mutated.

use glam::{Quat, Vec2, Vec3};

use super::height_field::FieldError;

/// Scales with absolute value below this are rejected as degenerate.
pub const MIN_SCALE: f32 = 1e-6;

/// The surface's world placement at the moment of a stamp or bounds query.
///
/// Read-only input owned by the scene; the X/Z scale is the world-space
/// extent of the surface plane (a point at `origin` maps to the center of
/// texture space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    /// World position of the surface center.
    pub origin: Vec3,
    /// World orientation of the surface.
    pub rotation: Quat,
    /// Non-uniform world scale; X and Z span the deformed plane.
    pub scale: Vec3,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl SurfaceTransform {
    /// Identity orientation and unit scale at `origin`.
    pub fn from_origin(origin: Vec3) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    /// Transform a world point into the surface's unscaled-orientation local
    /// space (translation and rotation removed, scale untouched).
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.origin)
    }

    fn check_planar_scale(&self) -> Result<(), FieldError> {
        if self.scale.x.abs() < MIN_SCALE || self.scale.z.abs() < MIN_SCALE {
            Err(FieldError::DegenerateTransform)
        } else {
            Ok(())
        }
    }
}

/// Map a world point onto the field's normalized texture space.
///
/// The point is taken into local space, then local X/Z map to
/// `u = x / scale.x + 0.5`, `v = z / scale.z + 0.5`. Points off the surface
/// map outside [0, 1]^2 and are clipped later by the compositor.
pub fn to_normalized(world_point: Vec3, transform: &SurfaceTransform) -> Result<Vec2, FieldError> {
    transform.check_planar_scale()?;
    let local = transform.world_to_local(world_point);
    Ok(Vec2::new(
        local.x / transform.scale.x + 0.5,
        local.z / transform.scale.z + 0.5,
    ))
}

/// Map a world-space radius into normalized texture units.
///
/// Normalized against the X-axis scale only; under non-uniform X/Z scale the
/// circular world footprint lands as an ellipse in texture space. Known
/// asymmetry, kept as-is.
pub fn to_normalized_radius(
    world_radius: f32,
    transform: &SurfaceTransform,
) -> Result<f32, FieldError> {
    if transform.scale.x.abs() < MIN_SCALE {
        return Err(FieldError::DegenerateTransform);
    }
    Ok(world_radius / transform.scale.x)
}
