//! Simple ray tracer example.
//!
//! Builds a small scene through the API and saves it to PPM format.

use glint_renderer::{
    render, Body, Camera, Color, NormalShader, RenderConfig, RenderResult, Scene, Texture, Vec3,
};

fn main() -> RenderResult<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene()?;
    println!("Scene has {} bodies", scene.len());

    let camera = Camera::new(640, 360, 60.0, Vec3::new(0.0, 1.0, -2.0))?;
    let config = RenderConfig {
        max_depth: 20,
        seed: 7,
        ..Default::default()
    };

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let output_path = "simple_render.ppm";
    image.save(output_path)?;
    println!("Saved to {}", output_path);

    Ok(())
}

fn build_scene() -> RenderResult<Scene> {
    let mut scene = Scene::new();

    // Dark floor with a faint blur
    scene.add(Body::floor(-1.0, Texture::solid(Color::new(0.2, 0.2, 0.25), 0.4, 0.05)?)?);

    // Three spheres: sharp mirror, blurry mirror, normal-colored
    scene.add(Body::sphere(
        Vec3::new(-2.2, 0.0, 8.0),
        1.0,
        Texture::solid(Color::new(0.9, 0.9, 0.9), 0.9, 0.0)?,
    )?);
    scene.add(Body::sphere(
        Vec3::new(0.0, 0.0, 8.0),
        1.0,
        Texture::solid(Color::new(0.8, 0.3, 0.2), 0.6, 0.3)?,
    )?);
    scene.add(Body::sphere(Vec3::new(2.2, 0.0, 8.0), 1.0, Texture::new(NormalShader, 0.3, 0.0)?)?);

    Ok(scene)
}
