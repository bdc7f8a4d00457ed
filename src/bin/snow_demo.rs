//! Snow Surface Demo
//!
//! Run with: `cargo run --bin snow_demo [config.json] [--gpu]`
//!
//! Headless walkthrough of the deformable snow surface: builds a field from
//! config, generates the snow plane mesh, stamps a walking path plus one
//! mouse-pick crater, publishes the surface bounds, prints an ASCII view of
//! the grid and saves a grayscale PNG snapshot.
//!
//! `--gpu` additionally acquires a headless device and uploads the field
//! into the real height texture.

use std::path::Path;

use glam::Vec3;

use snowfield_engine::field::{
    FieldView, SurfaceBoundsPublisher, SurfaceTransform, WorldBounds, save_png,
};
use snowfield_engine::game::{ContactPoint, SnowConfig, SnowInteraction};
use snowfield_engine::render::{HeadlessGpu, HeightFieldTexture, SnowUniforms, generate_snow_grid};

const ASCII_COLUMNS: usize = 64;
const ASCII_ROWS: usize = 32;
const SNAPSHOT_PATH: &str = "snow_heightmap.png";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_gpu = args.iter().any(|a| a == "--gpu");
    let config_path = args.iter().find(|a| !a.starts_with("--"));

    let config = match config_path {
        Some(path) => match SnowConfig::load(Path::new(path)) {
            Ok(config) => {
                println!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SnowConfig::default(),
    };

    let extent = config.surface_extent();
    println!(
        "Snow field: {res}x{res} cells over a {extent}m x {extent}m surface",
        res = config.height_map_resolution,
    );

    // Surface centered at the origin, spanning the full mesh extent.
    let transform = SurfaceTransform {
        scale: Vec3::new(extent, 1.0, extent),
        ..Default::default()
    };
    let mut interaction = SnowInteraction::new(&config, transform);

    let mesh = generate_snow_grid(config.grid_size, config.cell_size);
    println!(
        "Mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    // A walk across the surface, one footstep per stride.
    let start = Vec3::new(-extent * 0.35, 0.0, -extent * 0.35);
    let end = Vec3::new(extent * 0.35, 0.0, extent * 0.25);
    let steps = 24;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let foot = start.lerp(end, t);
        if let Err(e) = interaction.deform_at(foot) {
            eprintln!("Footstep failed: {}", e);
            std::process::exit(1);
        }
    }
    println!("Stamped {} footsteps from {:?} to {:?}", steps + 1, start, end);

    // One mouse-pick crater, wider and deeper than a footstep.
    let pick = ContactPoint {
        point: Vec3::new(-extent * 0.2, 0.0, extent * 0.25),
        radius: config.deform_radius * 3.0,
        strength: 0.6,
    };
    if let Err(e) = interaction.apply_contact(&pick) {
        eprintln!("Pick failed: {}", e);
        std::process::exit(1);
    }
    println!("Stamped pick crater at {:?}", pick.point);

    // Publish the surface's vertical extent for the shader uniforms.
    let half = extent * 0.5;
    let mut publisher = SurfaceBoundsPublisher::new(config.bounds_padding);
    let snapshot = publisher.publish(&WorldBounds::new(
        Vec3::new(-half, 0.0, -half),
        Vec3::new(half, config.displacement, half),
    ));
    let mut uniforms = SnowUniforms::default();
    uniforms.set_bounds(&snapshot);
    uniforms.set_displacement(config.displacement);
    uniforms.set_field_resolution(config.height_map_resolution);
    println!(
        "Bounds published: min_world_y = {}, max_world_y = {}",
        snapshot.min_world_y, snapshot.max_world_y
    );

    let view = match interaction.sample() {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Sample failed: {}", e);
            std::process::exit(1);
        }
    };

    print_ascii(&view);

    match save_png(&view, SNAPSHOT_PATH) {
        Ok(()) => println!("Saved height map snapshot to {}", SNAPSHOT_PATH),
        Err(e) => eprintln!("Snapshot failed: {}", e),
    }

    if use_gpu {
        let gpu = HeadlessGpu::new();
        let texture = HeightFieldTexture::new(&gpu.device, config.height_map_resolution as u32);
        texture.upload(&gpu.queue, &view);
        println!(
            "Uploaded {res}x{res} height texture to the GPU",
            res = texture.resolution()
        );
    }
}

/// Print a coarse top-down view of the field; deeper compression prints
/// denser characters, untouched snow prints blank.
fn print_ascii(view: &FieldView) {
    const RAMP: &[u8] = b" .:-=+*#%@";

    println!();
    for row in 0..ASCII_ROWS {
        let v = (row as f32 + 0.5) / ASCII_ROWS as f32;
        let mut line = String::with_capacity(ASCII_COLUMNS);
        for col in 0..ASCII_COLUMNS {
            let u = (col as f32 + 0.5) / ASCII_COLUMNS as f32;
            let compression = (1.0 - view.bilinear(u, v)).clamp(0.0, 1.0);
            let index = (compression * (RAMP.len() - 1) as f32).round() as usize;
            line.push(RAMP[index] as char);
        }
        println!("{}", line);
    }
    println!();
}
