//! Snow Surface Mesh Generator
//!
//! One-shot flat grid mesh for the snow plane. The surface shader displaces
//! it vertically from the height texture, so the mesh itself is just a
//! UV-mapped plane at y = 0; UVs span [0, 1]^2 to line up with the field's
//! texture space.

/// Vertex for the snow surface mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SnowVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Generated snow plane geometry.
pub struct SnowMesh {
    pub vertices: Vec<SnowVertex>,
    pub indices: Vec<u32>,
}

impl SnowMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a flat `grid_size` x `grid_size` cell plane on XZ.
///
/// `(grid_size + 1)^2` vertices at `(x * cell_size, 0, z * cell_size)` with
/// up-facing normals and UV `(x / grid_size, z / grid_size)`; two CCW
/// triangles per cell (counter-clockwise seen from +Y).
pub fn generate_snow_grid(grid_size: u32, cell_size: f32) -> SnowMesh {
    let side = grid_size + 1;
    let mut vertices = Vec::with_capacity((side * side) as usize);
    let mut indices = Vec::with_capacity((grid_size * grid_size * 6) as usize);

    for z in 0..side {
        for x in 0..side {
            vertices.push(SnowVertex {
                position: [x as f32 * cell_size, 0.0, z as f32 * cell_size],
                normal: [0.0, 1.0, 0.0],
                uv: [x as f32 / grid_size as f32, z as f32 / grid_size as f32],
            });
        }
    }

    for z in 0..grid_size {
        for x in 0..grid_size {
            let i = z * side + x;
            indices.extend_from_slice(&[
                i,
                i + side,
                i + 1,
                i + 1,
                i + side,
                i + side + 1,
            ]);
        }
    }

    SnowMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_grid_counts() {
        let mesh = generate_snow_grid(10, 0.5);

        assert_eq!(mesh.vertex_count(), 11 * 11);
        assert_eq!(mesh.indices.len(), 10 * 10 * 6);
        assert_eq!(mesh.triangle_count(), 200);
    }

    #[test]
    fn test_mesh_lies_on_ground_plane() {
        let mesh = generate_snow_grid(4, 1.0);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_corner_uvs() {
        let mesh = generate_snow_grid(8, 0.25);
        let last = mesh.vertex_count() - 1;

        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices[last].uv, [1.0, 1.0]);
        assert_eq!(mesh.vertices[8].uv, [1.0, 0.0]);
    }

    #[test]
    fn test_first_triangle_winds_counter_clockwise_from_above() {
        let mesh = generate_snow_grid(2, 1.0);
        let p = |i: usize| Vec3::from(mesh.vertices[mesh.indices[i] as usize].position);

        let normal = (p(1) - p(0)).cross(p(2) - p(0));
        assert!(normal.y > 0.0, "First triangle should face +Y");
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = generate_snow_grid(6, 1.0);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }
}
