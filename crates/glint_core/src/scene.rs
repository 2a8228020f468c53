//! Scene description types for Glint.
//!
//! These types describe *what* to render without any intersection or shading
//! logic. They deserialize from JSON and are turned into renderable bodies by
//! `glint_renderer`. Values are not validated here; the renderer's
//! constructors reject out-of-range radii and material parameters.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Default maximum number of reflection bounces.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Pale grey returned by rays that escape the scene.
pub const DEFAULT_BACKGROUND: [f32; 3] = [0.71, 0.784, 0.798];

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Pinhole camera settings.
///
/// The camera always looks down `+Z`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Camera position
    pub position: Vec3,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov_degrees: 60.0,
            position: Vec3::ZERO,
        }
    }
}

/// Settings for the tracer and frame renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Maximum number of reflection bounces
    pub max_depth: u32,

    /// Color returned by rays that hit nothing (RGB, 0-1)
    pub background: [f32; 3],

    /// Seed for the per-pixel diffusion generators
    pub seed: u64,

    /// Render buckets in parallel
    pub parallel: bool,

    /// Bucket edge length in pixels
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            background: DEFAULT_BACKGROUND,
            seed: 0,
            parallel: true,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Geometry of a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere { center: Vec3, radius: f32 },
    Floor { height: f32 },
}

/// Color function of a texture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShaderDescription {
    /// One color everywhere
    Solid { color: [f32; 3] },

    /// Color derived from the surface normal
    Normal,
}

/// Surface response of a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureDescription {
    pub shader: ShaderDescription,

    /// Fraction of the shaded color replaced by the reflected ray, in (0, 1)
    pub reflectivity: f32,

    /// Random spread added to the mirror direction, in [0, 1]
    #[serde(default)]
    pub diffusivity: f32,
}

impl TextureDescription {
    /// Single-color texture.
    pub fn solid(color: [f32; 3], reflectivity: f32, diffusivity: f32) -> Self {
        Self {
            shader: ShaderDescription::Solid { color },
            reflectivity,
            diffusivity,
        }
    }
}

/// A body: one shape with one texture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    pub texture: TextureDescription,
}

impl BodyDescription {
    pub fn sphere(center: Vec3, radius: f32, texture: TextureDescription) -> Self {
        Self {
            shape: ShapeDescription::Sphere { center, radius },
            texture,
        }
    }

    pub fn floor(height: f32, texture: TextureDescription) -> Self {
        Self {
            shape: ShapeDescription::Floor { height },
            texture,
        }
    }
}

/// A complete scene: camera, render settings and an ordered list of bodies.
///
/// Body order only matters when two hits are exactly equidistant; the body
/// listed first wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub name: String,
    pub camera: CameraDescription,
    pub render: RenderSettings,
    pub bodies: Vec<BodyDescription>,
}

impl SceneDescription {
    /// Create an empty scene with default camera and render settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a body.
    pub fn with_body(mut self, body: BodyDescription) -> Self {
        self.bodies.push(body);
        self
    }

    /// Five reflective spheres above a dark blue floor.
    pub fn default_scene() -> Self {
        Self::new("mirror_spheres")
            .with_body(BodyDescription::sphere(
                Vec3::new(-15.0, 2.0, 30.0),
                4.0,
                TextureDescription::solid([0.1, 0.8, 0.4], 0.7, 0.1),
            ))
            .with_body(BodyDescription::sphere(
                Vec3::new(-5.0, -8.0, 10.0),
                4.0,
                TextureDescription::solid([1.0, 1.0, 1.0], 0.8, 0.1),
            ))
            .with_body(BodyDescription::sphere(
                Vec3::new(-15.0, 2.0, 20.0),
                4.0,
                TextureDescription::solid([0.5, 0.5, 0.9], 0.9, 0.15),
            ))
            .with_body(BodyDescription::sphere(
                Vec3::new(5.0, -4.0, 10.0),
                4.0,
                TextureDescription::solid([0.9, 0.3, 0.9], 0.7, 0.2),
            ))
            .with_body(BodyDescription::sphere(
                Vec3::new(1.0, 8.0, 15.0),
                4.0,
                TextureDescription::solid([0.5, 0.2, 0.9], 0.5, 0.05),
            ))
            .with_body(BodyDescription::floor(
                -5.0,
                TextureDescription::solid([0.0, 0.09, 0.5], 0.5, 0.0),
            ))
    }

    /// Number of bodies in the scene.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
