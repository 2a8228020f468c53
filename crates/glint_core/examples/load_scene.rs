//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- assets/mirror_spheres.json

use std::env;

use glint_core::{load_scene_json, ShapeDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-json-file>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- assets/mirror_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene_json(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!(
                "Camera: {}x{} @ {} deg, at {}",
                scene.camera.width,
                scene.camera.height,
                scene.camera.fov_degrees,
                scene.camera.position
            );
            println!(
                "Render: depth {}, seed {}, parallel {}",
                scene.render.max_depth, scene.render.seed, scene.render.parallel
            );

            println!("\n--- Bodies ---");
            for (i, body) in scene.bodies.iter().enumerate() {
                let shape = match &body.shape {
                    ShapeDescription::Sphere { center, radius } => {
                        format!("sphere at {} r={}", center, radius)
                    }
                    ShapeDescription::Floor { height } => format!("floor at y={}", height),
                };
                println!(
                    "  [{}] {} - reflectivity {}, diffusivity {}",
                    i, shape, body.texture.reflectivity, body.texture.diffusivity
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}
