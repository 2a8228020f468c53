//! Glint Renderer - CPU Reflection Ray Tracing
//!
//! A recursive ray tracer for mirror-like spheres over an infinite floor.
//! Each hit blends the surface color with a reflected ray whose direction is
//! randomly spread by the surface's diffusivity, down to a fixed depth.
//!
//! Frames render on one thread or as buckets over the rayon pool, and both
//! paths produce the same pixels for the same seed.

mod body;
mod bucket;
mod camera;
mod error;
mod floor;
mod framebuffer;
mod renderer;
mod scene;
mod sphere;
mod texture;

pub use body::{Body, BodyId, Geometry, Hit};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult, SceneError};
pub use floor::Floor;
pub use framebuffer::Framebuffer;
pub use renderer::{
    pixel_seed, render, render_frame, render_frame_parallel, render_pixel, trace, RenderConfig,
};
pub use scene::{build_scene, Scene};
pub use sphere::Sphere;
pub use texture::{NormalShader, Shader, SolidColor, Texture};

/// Re-export the math types used in the public API
pub use glint_math::{Color, Interval, Ray, Vec3};
