//! Surface Bounds Publisher
//!
//! Tracks the snow surface's world-space vertical extent once per update
//! tick and publishes it as a pair of scalars for consumers that map world
//! height into normalized space (the surface shader being the usual one).
//! Independent of the height field; shares no state with it.

use glam::Vec3;

/// Degenerate bounds are widened to at least this vertical extent.
pub const MIN_VERTICAL_EXTENT: f32 = 1e-4;

/// World-space axis-aligned bounding volume of the rendered surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl WorldBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }
}

/// Published vertical extent of the surface for one update tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsSnapshot {
    pub min_world_y: f32,
    pub max_world_y: f32,
}

impl BoundsSnapshot {
    /// Height of the published band; at least [`MIN_VERTICAL_EXTENT`].
    pub fn vertical_extent(&self) -> f32 {
        self.max_world_y - self.min_world_y
    }

    /// Map a world-space Y into the published band, 0.0 at the bottom and
    /// 1.0 at the top. Not clamped; callers clamp where it matters.
    pub fn normalize_height(&self, world_y: f32) -> f32 {
        (world_y - self.min_world_y) / self.vertical_extent()
    }
}

/// Recomputes and republishes the surface's vertical extent each tick.
///
/// Runs on its own cadence, decoupled from deformation; the latest snapshot
/// stays available for consumers that poll between publishes.
pub struct SurfaceBoundsPublisher {
    /// Extra margin added below `min.y` and above `max.y`.
    pub padding: f32,
    latest: Option<BoundsSnapshot>,
}

impl SurfaceBoundsPublisher {
    pub fn new(padding: f32) -> Self {
        Self {
            padding,
            latest: None,
        }
    }

    /// Compute a snapshot from the renderer's current bounds.
    ///
    /// Zero-height bounds are widened upward by [`MIN_VERTICAL_EXTENT`] so
    /// downstream normalization never divides by zero.
    pub fn publish(&mut self, bounds: &WorldBounds) -> BoundsSnapshot {
        let min_world_y = bounds.min.y - self.padding;
        let mut max_world_y = bounds.max.y + self.padding;
        if max_world_y - min_world_y < MIN_VERTICAL_EXTENT {
            max_world_y = min_world_y + MIN_VERTICAL_EXTENT;
        }

        let snapshot = BoundsSnapshot {
            min_world_y,
            max_world_y,
        };
        self.latest = Some(snapshot);
        snapshot
    }

    /// Most recently published snapshot, if any.
    pub fn latest(&self) -> Option<BoundsSnapshot> {
        self.latest
    }
}
