//! Render Tests - Mesh Generation, Uniform Layout, and Shader Validation
//!
//! Tests for the render module: GPU-compatible struct serialization, snow
//! plane generation, and WGSL validation of the surface shader.

use snowfield_engine::field::{BoundsSnapshot, HeightField};
use snowfield_engine::render::{
    SNOW_SURFACE_SHADER, SnowUniforms, SnowVertex, generate_snow_grid,
};

// ============================================================================
// SnowVertex Tests
// ============================================================================

#[test]
fn test_snow_vertex_size_32_bytes() {
    // SnowVertex must stay 32 bytes to match the vertex buffer layout.
    assert_eq!(
        std::mem::size_of::<SnowVertex>(),
        32,
        "SnowVertex must be exactly 32 bytes (3 + 3 + 2 floats)"
    );
}

#[test]
fn test_snow_vertex_bytemuck_pod() {
    let mesh = generate_snow_grid(2, 1.0);
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
    assert_eq!(bytes.len(), mesh.vertex_count() * 32);
}

// ============================================================================
// SnowUniforms Tests
// ============================================================================

#[test]
fn test_snow_uniforms_size_112_bytes() {
    // Critical: SnowUniforms MUST be 112 bytes to match the WGSL layout.
    assert_eq!(
        std::mem::size_of::<SnowUniforms>(),
        112,
        "SnowUniforms must be exactly 112 bytes to match the WGSL struct layout"
    );
}

#[test]
fn test_snow_uniforms_default() {
    let uniforms = SnowUniforms::default();

    assert_eq!(uniforms.min_world_y, 0.0);
    assert_eq!(uniforms.max_world_y, 1.0);
    assert_eq!(uniforms.displacement, 1.0);
    assert_eq!(uniforms.field_resolution, 512.0);
    assert_eq!(uniforms.view_proj, glam::Mat4::IDENTITY.to_cols_array_2d());
}

#[test]
fn test_snow_uniforms_set_bounds() {
    let mut uniforms = SnowUniforms::default();
    uniforms.set_bounds(&BoundsSnapshot {
        min_world_y: -2.0,
        max_world_y: 3.5,
    });

    assert_eq!(uniforms.min_world_y, -2.0);
    assert_eq!(uniforms.max_world_y, 3.5);
}

#[test]
fn test_snow_uniforms_bytemuck_pod() {
    let uniforms = SnowUniforms::default();
    let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
    assert_eq!(bytes.len(), std::mem::size_of::<SnowUniforms>());
}

// ============================================================================
// Snow Mesh Tests
// ============================================================================

#[test]
fn test_snow_grid_dimensions() {
    let mesh = generate_snow_grid(100, 0.1);

    assert_eq!(mesh.vertex_count(), 101 * 101);
    assert_eq!(mesh.indices.len(), 100 * 100 * 6);

    // The plane spans grid_size * cell_size world units.
    let last = &mesh.vertices[mesh.vertex_count() - 1];
    assert!((last.position[0] - 10.0).abs() < 1e-4);
    assert!((last.position[2] - 10.0).abs() < 1e-4);
}

#[test]
fn test_snow_grid_uv_spans_unit_square() {
    let mesh = generate_snow_grid(10, 0.5);

    for vertex in &mesh.vertices {
        assert!(vertex.uv[0] >= 0.0 && vertex.uv[0] <= 1.0);
        assert!(vertex.uv[1] >= 0.0 && vertex.uv[1] <= 1.0);
    }
    assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(mesh.vertices[mesh.vertex_count() - 1].uv, [1.0, 1.0]);
}

// ============================================================================
// Shader Validation Tests
// ============================================================================

#[test]
fn test_snow_surface_shader_parses_as_wgsl() {
    let module = naga::front::wgsl::parse_str(SNOW_SURFACE_SHADER);
    assert!(
        module.is_ok(),
        "snow_surface.wgsl failed to parse: {:?}",
        module.err()
    );
}

#[test]
fn test_snow_surface_shader_declares_both_entry_points() {
    let module = naga::front::wgsl::parse_str(SNOW_SURFACE_SHADER).unwrap();
    let names: Vec<&str> = module
        .entry_points
        .iter()
        .map(|ep| ep.name.as_str())
        .collect();

    assert!(names.contains(&"vs_main"), "Missing vertex entry point");
    assert!(names.contains(&"fs_main"), "Missing fragment entry point");
}

// ============================================================================
// Field-to-Texture Data Tests
// ============================================================================

#[test]
fn test_field_cells_cast_to_texture_bytes() {
    // The upload path casts the f32 grid straight to bytes; 4 bytes per
    // texel, tightly packed rows.
    let field = HeightField::initialized(16);
    let view = field.sample().unwrap();
    let bytes: &[u8] = bytemuck::cast_slice(view.cells());

    assert_eq!(bytes.len(), 16 * 16 * 4);
}
