//! Snow Surface Configuration
//!
//! Centralized tuning parameters for one snow surface: field resolution,
//! default stamp size, mesh dimensions and display scale. Persists as
//! human-editable JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for a deformable snow surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnowConfig {
    /// Height field resolution R (the field is R x R cells).
    pub height_map_resolution: usize,
    /// Default deformation radius in world units.
    pub deform_radius: f32,
    /// Default snow height removed at a stamp center.
    pub deform_strength: f32,
    /// Margin added around the surface's vertical bounds when publishing.
    pub bounds_padding: f32,
    /// Snow plane cells per side.
    pub grid_size: u32,
    /// World units per mesh cell.
    pub cell_size: f32,
    /// World-space height of undisturbed snow above the base plane.
    pub displacement: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            height_map_resolution: 512,
            deform_radius: 1.0,
            deform_strength: 0.1,
            bounds_padding: 0.0,
            grid_size: 100,
            cell_size: 0.1,
            displacement: 1.0,
        }
    }
}

impl SnowConfig {
    /// World-space side length of the snow plane.
    pub fn surface_extent(&self) -> f32 {
        self.grid_size as f32 * self.cell_size
    }

    /// Persist the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
