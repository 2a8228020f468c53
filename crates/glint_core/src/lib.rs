//! Glint Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `BodyDescription`,
//!   `CameraDescription`, `RenderSettings`
//! - **JSON support**: loading scene descriptions from files or strings
//! - **A built-in scene** used when no scene file is given
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene_json;
//!
//! let desc = load_scene_json("assets/mirror_spheres.json")?;
//! println!("Loaded {} bodies", desc.bodies.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene_from_str, load_scene_json, LoadError, LoadResult};
pub use scene::{
    BodyDescription, CameraDescription, RenderSettings, SceneDescription, ShaderDescription,
    ShapeDescription, TextureDescription,
};
