//! Error types for scene construction and rendering.

use thiserror::Error;

/// Errors raised while constructing bodies and textures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),
}

/// Errors raised while setting up or writing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Invalid body {index}: {source}")]
    InvalidBody {
        index: usize,
        #[source]
        source: SceneError,
    },

    #[error("Could not allocate a framebuffer of {width}x{height} pixels")]
    AllocationFailure { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
