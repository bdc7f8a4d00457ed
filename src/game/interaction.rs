//! Contact-Point Interaction
//!
//! Binds a height field to the scene: the interaction layer owns the field
//! it deforms and the surface transform used to map contacts into it, both
//! fixed at construction time. Movement and picking collaborators hand over
//! already-resolved world-space contact points; no raycasting happens here.

use glam::Vec3;

use crate::field::{FieldError, FieldView, HeightField, SurfaceTransform};
use crate::game::config::SnowConfig;

/// A resolved world-space contact against the snow surface.
///
/// Produced by whatever hit-tests against the surface (foot ray, mouse
/// pick); consumed immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    /// World-space contact position.
    pub point: Vec3,
    /// Footprint radius in world units.
    pub radius: f32,
    /// Snow height removed at the contact center.
    pub strength: f32,
}

/// Deformation entry point for one snow surface.
///
/// Holds an explicit handle to the specific field it targets, resolved at
/// construction time rather than looked up per interaction.
pub struct SnowInteraction {
    field: HeightField,
    transform: SurfaceTransform,
    deform_radius: f32,
    deform_strength: f32,
}

impl SnowInteraction {
    /// Create an interaction layer with a freshly initialized field.
    pub fn new(config: &SnowConfig, transform: SurfaceTransform) -> Self {
        Self {
            field: HeightField::initialized(config.height_map_resolution),
            transform,
            deform_radius: config.deform_radius,
            deform_strength: config.deform_strength,
        }
    }

    /// The field this layer deforms.
    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// Current surface transform.
    pub fn transform(&self) -> &SurfaceTransform {
        &self.transform
    }

    /// Update the surface transform (the surface moved in the scene).
    pub fn set_transform(&mut self, transform: SurfaceTransform) {
        self.transform = transform;
    }

    /// Deform at a world point with the configured default radius/strength.
    pub fn deform_at(&mut self, world_point: Vec3) -> Result<(), FieldError> {
        self.field.stamp_world(
            world_point,
            self.deform_radius,
            self.deform_strength,
            &self.transform,
        )
    }

    /// Deform with per-contact radius and strength.
    pub fn apply_contact(&mut self, contact: &ContactPoint) -> Result<(), FieldError> {
        self.field.stamp_world(
            contact.point,
            contact.radius,
            contact.strength,
            &self.transform,
        )
    }

    /// Read-only view of the current snow state.
    pub fn sample(&self) -> Result<FieldView<'_>, FieldError> {
        self.field.sample()
    }

    /// Release the field's buffers.
    pub fn release(&mut self) {
        self.field.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_setup() -> SnowInteraction {
        let config = SnowConfig {
            height_map_resolution: 65,
            deform_radius: 1.0,
            deform_strength: 0.25,
            ..Default::default()
        };
        let transform = SurfaceTransform {
            scale: Vec3::new(10.0, 1.0, 10.0),
            ..Default::default()
        };
        SnowInteraction::new(&config, transform)
    }

    #[test]
    fn test_deform_at_center_compresses_snow() {
        let mut interaction = test_setup();
        interaction.deform_at(Vec3::ZERO).unwrap();

        let view = interaction.sample().unwrap();
        // Surface center is cell (32, 32) at resolution 65.
        assert!((view.get(32, 32) - 0.75).abs() < 1e-5);
        assert_eq!(view.get(0, 0), 1.0);
    }

    #[test]
    fn test_apply_contact_overrides_defaults() {
        let mut interaction = test_setup();
        interaction
            .apply_contact(&ContactPoint {
                point: Vec3::ZERO,
                radius: 2.0,
                strength: 0.5,
            })
            .unwrap();

        let view = interaction.sample().unwrap();
        assert!((view.get(32, 32) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_repeated_footsteps_accumulate() {
        let mut interaction = test_setup();
        for _ in 0..3 {
            interaction.deform_at(Vec3::ZERO).unwrap();
        }

        let view = interaction.sample().unwrap();
        assert!((view.get(32, 32) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_release_then_deform_fails() {
        let mut interaction = test_setup();
        interaction.release();
        assert_eq!(
            interaction.deform_at(Vec3::ZERO),
            Err(FieldError::NotInitialized)
        );
    }
}
