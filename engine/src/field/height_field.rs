//! Snow Height Field
//!
//! Owns the persistent deformation state of one snow surface: two
//! equally-sized scalar buffers (current + scratch) holding remaining snow
//! height per cell, 1.0 = undisturbed full depth, 0.0 = bare ground.
//!
//! Stamping writes the whole grid into the scratch buffer and then flips
//! which buffer is "current" (the CPU port of GPU double-buffering), so a
//! reader never sees a half-written grid. `stamp` takes `&mut self`, which
//! serializes writers; `sample` borrows the current buffer read-only.
//!
//! Lifecycle: `Uninitialized -> Ready` (initialize) `-> Ready` (stamp,
//! buffers swap) `-> Released` (release). Stamping or sampling outside
//! `Ready` fails with [`FieldError::NotInitialized`].

use glam::Vec3;

use super::compositor::{Stamp, composite_stamp};
use super::coords::{self, SurfaceTransform};

/// Height value of undisturbed snow.
pub const FULL_SNOW: f32 = 1.0;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors surfaced by the height field and the coordinate mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Stamp or sample called before `initialize` or after `release`.
    /// Recoverable by re-initializing the field.
    NotInitialized,
    /// Zero or near-zero surface scale; mapping through it would propagate
    /// infinities into the field.
    DegenerateTransform,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::NotInitialized => write!(f, "height field is not initialized"),
            FieldError::DegenerateTransform => {
                write!(f, "surface transform has zero or near-zero scale")
            }
        }
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// READ VIEW
// ============================================================================

/// Read-only snapshot of the current buffer.
///
/// Addressable like a 2D texture: `get` for exact cells, `bilinear` for
/// filtered reads at normalized coordinates (clamp-to-edge, matching how the
/// display texture samples the same data).
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    cells: &'a [f32],
    resolution: usize,
}

impl<'a> FieldView<'a> {
    /// Grid resolution R (the grid is R x R).
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Raw row-major cell data, `resolution * resolution` values.
    pub fn cells(&self) -> &'a [f32] {
        self.cells
    }

    /// Value of cell (x, y). Panics on out-of-range indices.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.resolution && y < self.resolution);
        self.cells[y * self.resolution + x]
    }

    /// Bilinear sample at normalized (u, v), clamp-to-edge.
    pub fn bilinear(&self, u: f32, v: f32) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let max_index = self.resolution - 1;
        let res_f = self.resolution as f32;

        let x = (u * res_f - 0.5).clamp(0.0, max_index as f32);
        let y = (v * res_f - 0.5).clamp(0.0, max_index as f32);
        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(max_index);
        let y1 = (y0 + 1).min(max_index);
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let c00 = self.cells[y0 * self.resolution + x0];
        let c10 = self.cells[y0 * self.resolution + x1];
        let c01 = self.cells[y1 * self.resolution + x0];
        let c11 = self.cells[y1 * self.resolution + x1];

        let top = c00 + (c10 - c00) * fx;
        let bottom = c01 + (c11 - c01) * fx;
        top + (bottom - top) * fy
    }
}

// ============================================================================
// HEIGHT FIELD
// ============================================================================

struct FieldBuffers {
    /// Ping-pong pair; `current` indexes the readable buffer.
    cells: [Vec<f32>; 2],
    current: usize,
    resolution: usize,
}

/// Persistent snow depth state for one surface.
///
/// Exclusively owned by the surface instance it belongs to. Cell values only
/// ever decrease; no reset short of re-initializing the whole field.
pub struct HeightField {
    buffers: Option<FieldBuffers>,
}

impl Default for HeightField {
    fn default() -> Self {
        Self::new()
    }
}

impl HeightField {
    /// Create an uninitialized field. Call [`initialize`](Self::initialize)
    /// before stamping or sampling.
    pub fn new() -> Self {
        Self { buffers: None }
    }

    /// Create a field already initialized at `resolution`.
    pub fn initialized(resolution: usize) -> Self {
        let mut field = Self::new();
        field.initialize(resolution);
        field
    }

    /// Allocate both buffers at `resolution` x `resolution` and fill them
    /// with full snow. Re-initializing a live field resets it to full snow.
    ///
    /// `resolution` must be at least 1.
    pub fn initialize(&mut self, resolution: usize) {
        debug_assert!(resolution > 0, "height field resolution must be >= 1");
        let cells = vec![FULL_SNOW; resolution * resolution];
        self.buffers = Some(FieldBuffers {
            cells: [cells.clone(), cells],
            current: 0,
            resolution,
        });
    }

    /// Whether the field is in the `Ready` state.
    pub fn is_ready(&self) -> bool {
        self.buffers.is_some()
    }

    /// Grid resolution, if initialized.
    pub fn resolution(&self) -> Option<usize> {
        self.buffers.as_ref().map(|b| b.resolution)
    }

    /// Read-only view of the current buffer for rendering and diagnostics.
    pub fn sample(&self) -> Result<FieldView<'_>, FieldError> {
        let buffers = self.buffers.as_ref().ok_or(FieldError::NotInitialized)?;
        Ok(FieldView {
            cells: &buffers.cells[buffers.current],
            resolution: buffers.resolution,
        })
    }

    /// Imprint a stamp given in normalized texture space.
    ///
    /// The full grid is composited into the scratch buffer, then the
    /// current/scratch roles flip. Non-positive radius or strength still
    /// swaps, producing an identical grid. Stamps reaching past the grid
    /// edge are clipped, never an error.
    pub fn stamp(&mut self, stamp: Stamp) -> Result<(), FieldError> {
        let buffers = self.buffers.as_mut().ok_or(FieldError::NotInitialized)?;

        let (front, back) = buffers.cells.split_at_mut(1);
        let (src, dst) = if buffers.current == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        composite_stamp(src, dst, buffers.resolution, &stamp);

        // Readers only ever dereference `current`; flipping it after the
        // scratch write completes is what makes the swap appear atomic.
        buffers.current ^= 1;
        Ok(())
    }

    /// Imprint a world-space contact point: maps the point and radius into
    /// normalized texture space through the surface transform, then stamps.
    pub fn stamp_world(
        &mut self,
        world_point: Vec3,
        world_radius: f32,
        strength: f32,
        transform: &SurfaceTransform,
    ) -> Result<(), FieldError> {
        let position = coords::to_normalized(world_point, transform)?;
        let radius = coords::to_normalized_radius(world_radius, transform)?;
        self.stamp(Stamp::new(position, radius, strength))
    }

    /// Free both buffers. The field behaves as before `initialize`; a later
    /// `initialize` brings it back to full snow.
    pub fn release(&mut self) {
        self.buffers = None;
    }
}
