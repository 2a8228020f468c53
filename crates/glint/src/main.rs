//! Glint command-line renderer.
//!
//! Usage: `glint [OUTPUT] [SCENE_JSON]`
//!
//! Renders the scene file (or the built-in mirror spheres) and writes the
//! image to OUTPUT, which defaults to `./test.ppm`. A `.png` extension
//! writes PNG instead of plain-text PPM.

use anyhow::{Context, Result};
use glint_core::{load_scene_json, SceneDescription};
use glint_renderer::{build_scene, render};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

const DEFAULT_OUTPUT: &str = "./test.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = env::args().skip(1);
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let scene_path = args.next().map(PathBuf::from);

    log::info!("Starting Glint");

    let desc = match &scene_path {
        Some(path) => load_scene_json(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the built-in scene");
            SceneDescription::default_scene()
        }
    };

    let (scene, camera, config) = build_scene(&desc)
        .with_context(|| format!("Failed to build scene '{}'", desc.name))?;

    let start = Instant::now();
    let image = render(&camera, &scene, &config).context("Render failed")?;

    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}
