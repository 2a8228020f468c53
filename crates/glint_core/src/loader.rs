//! Scene description loading.
//!
//! Scenes are stored as JSON. Every top-level section is optional and falls
//! back to its default, so a file holding only `bodies` is a valid scene.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
///
/// The scene name defaults to the file stem when the file doesn't set one.
pub fn load_scene_json<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {} ({} bodies)",
        scene.name,
        path.display(),
        scene.body_count()
    );

    Ok(scene)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;
    if scene.bodies.is_empty() {
        log::warn!("Scene '{}' has no bodies, every pixel will be background", scene.name);
    }
    Ok(scene)
}
