//! Deformation Compositor
//!
//! The per-cell compositing kernel that imprints a single stamp into a snow
//! height buffer. Kept as a pure function of (source buffer, stamp) so it can
//! be tested without any buffer lifecycle or swap bookkeeping.
//!
//! Cells are addressed by their centers: cell (x, y) sits at
//! `((x + 0.5) / R, (y + 0.5) / R)` in normalized texture space. A stamp
//! reduces every cell within its radius by a linearly falling-off amount and
//! leaves everything else untouched.

use glam::Vec2;

/// An ephemeral deformation request in the field's normalized texture space.
///
/// Produced by the coordinate mapper from a world-space contact point and
/// consumed immediately by the compositor; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamp {
    /// Center of the depression, (u, v) in [0, 1]^2.
    pub position: Vec2,
    /// Footprint radius in normalized texture units.
    pub radius: f32,
    /// Snow height removed at the stamp center (falls off linearly to 0 at the radius).
    pub strength: f32,
}

impl Stamp {
    /// Create a stamp at a normalized position.
    pub fn new(position: Vec2, radius: f32, strength: f32) -> Self {
        Self {
            position,
            radius,
            strength,
        }
    }
}

/// Composite a stamp from `src` into `dst`.
///
/// `dst` receives a full copy of `src`, then every cell whose center lies
/// strictly within `stamp.radius` of `stamp.position` is reduced by
/// `strength * (1 - distance / radius)`, clamped at 0.0. A cell exactly on
/// the radius gets weight 0 and stays unchanged. Stamps reaching past the
/// grid edge are clipped to valid indices.
///
/// Non-positive radius or strength degrades to a plain copy.
///
/// Both slices must be `resolution * resolution` long.
pub fn composite_stamp(src: &[f32], dst: &mut [f32], resolution: usize, stamp: &Stamp) {
    debug_assert_eq!(src.len(), resolution * resolution);
    debug_assert_eq!(dst.len(), src.len());

    dst.copy_from_slice(src);

    if stamp.radius <= 0.0 || stamp.strength <= 0.0 || resolution == 0 {
        return;
    }

    // Only the clipped bounding box of the stamp circle needs the distance test.
    let res_f = resolution as f32;
    let max_index = resolution - 1;
    let clip = |coord: f32| -> usize {
        let cell = coord * res_f - 0.5;
        (cell.max(0.0) as usize).min(max_index)
    };
    let x_lo = clip(stamp.position.x - stamp.radius);
    let x_hi = clip(stamp.position.x + stamp.radius);
    let y_lo = clip(stamp.position.y - stamp.radius);
    let y_hi = clip(stamp.position.y + stamp.radius);

    for y in y_lo..=y_hi {
        let v = (y as f32 + 0.5) / res_f;
        for x in x_lo..=x_hi {
            let u = (x as f32 + 0.5) / res_f;
            let distance = Vec2::new(u, v).distance(stamp.position);
            if distance < stamp.radius {
                let weight = 1.0 - distance / stamp.radius;
                let index = y * resolution + x;
                dst[index] = (src[index] - stamp.strength * weight).max(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_grid(resolution: usize) -> Vec<f32> {
        vec![1.0; resolution * resolution]
    }

    #[test]
    fn test_center_cell_reduced_by_full_strength() {
        // Resolution 5 puts cell (2, 2) exactly at (0.5, 0.5).
        let src = full_grid(5);
        let mut dst = vec![0.0; 25];
        let stamp = Stamp::new(Vec2::new(0.5, 0.5), 0.2, 0.25);

        composite_stamp(&src, &mut dst, 5, &stamp);

        assert!(
            (dst[2 * 5 + 2] - 0.75).abs() < 1e-6,
            "Center cell should lose exactly the stamp strength"
        );
    }

    #[test]
    fn test_cells_outside_radius_unchanged() {
        let src = full_grid(9);
        let mut dst = vec![0.0; 81];
        let stamp = Stamp::new(Vec2::new(0.5, 0.5), 0.1, 0.5);

        composite_stamp(&src, &mut dst, 9, &stamp);

        // Corner cell is far outside a 0.1 radius around the center.
        assert_eq!(dst[0], 1.0, "Corner cell should be untouched");
        assert_eq!(dst[80], 1.0, "Opposite corner should be untouched");
    }

    #[test]
    fn test_reduction_clamps_at_zero() {
        let src = vec![0.1; 25];
        let mut dst = vec![0.0; 25];
        let stamp = Stamp::new(Vec2::new(0.5, 0.5), 0.3, 1.0);

        composite_stamp(&src, &mut dst, 5, &stamp);

        assert_eq!(dst[2 * 5 + 2], 0.0, "Value should clamp at zero");
        for &cell in &dst {
            assert!(cell >= 0.0, "No cell may go negative");
        }
    }

    #[test]
    fn test_zero_strength_is_a_copy() {
        let src: Vec<f32> = (0..25).map(|i| i as f32 / 25.0).collect();
        let mut dst = vec![0.0; 25];
        let stamp = Stamp::new(Vec2::new(0.5, 0.5), 0.3, 0.0);

        composite_stamp(&src, &mut dst, 5, &stamp);

        assert_eq!(dst, src, "Zero strength must leave the grid unchanged");
    }

    #[test]
    fn test_zero_radius_is_a_copy() {
        let src = full_grid(5);
        let mut dst = vec![0.0; 25];
        let stamp = Stamp::new(Vec2::new(0.5, 0.5), 0.0, 0.5);

        composite_stamp(&src, &mut dst, 5, &stamp);

        assert_eq!(dst, src, "Zero radius affects no cells");
    }

    #[test]
    fn test_edge_stamp_is_clipped() {
        let src = full_grid(8);
        let mut dst = vec![0.0; 64];
        // Circle centered on the grid corner, mostly outside the grid.
        let stamp = Stamp::new(Vec2::new(0.0, 0.0), 0.2, 0.5);

        composite_stamp(&src, &mut dst, 8, &stamp);

        assert!(dst[0] < 1.0, "Corner cell inside the radius should be reduced");
        assert_eq!(dst[63], 1.0, "Far corner should be untouched");
    }

    #[test]
    fn test_stamp_entirely_off_grid() {
        let src = full_grid(6);
        let mut dst = vec![0.0; 36];
        let stamp = Stamp::new(Vec2::new(-2.0, -2.0), 0.25, 0.5);

        composite_stamp(&src, &mut dst, 6, &stamp);

        assert_eq!(dst, src, "A stamp entirely off the grid changes nothing");
    }

    #[test]
    fn test_deterministic() {
        let src = full_grid(16);
        let stamp = Stamp::new(Vec2::new(0.3, 0.7), 0.15, 0.2);

        let mut a = vec![0.0; 256];
        let mut b = vec![0.0; 256];
        composite_stamp(&src, &mut a, 16, &stamp);
        composite_stamp(&src, &mut b, 16, &stamp);

        assert_eq!(a, b, "Identical inputs must produce identical output");
    }
}
