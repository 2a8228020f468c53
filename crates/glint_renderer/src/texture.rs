//! Surface textures: a color function plus reflection parameters.

use glint_math::{Color, Interval, Ray, Vec3};

use crate::SceneError;

/// Trait for the local color of a surface.
///
/// A shader sees the incident ray and the surface normal at the hit point and
/// returns the color the surface contributes before reflection is blended in.
pub trait Shader: Send + Sync {
    fn shade(&self, ray: &Ray, normal: Vec3) -> Color;
}

/// A single color everywhere on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shader for SolidColor {
    fn shade(&self, _ray: &Ray, _normal: Vec3) -> Color {
        self.color
    }
}

/// Maps the surface normal to a color, `0.5 + n / 2`.
///
/// Handy for checking orientation of normals in a render.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalShader;

impl Shader for NormalShader {
    fn shade(&self, _ray: &Ray, normal: Vec3) -> Color {
        Color::from_vec3(0.5 * (normal + Vec3::ONE))
    }
}

/// Material of a body.
pub struct Texture {
    shader: Box<dyn Shader>,
    /// Fraction of the local color replaced by the reflected ray, in (0, 1)
    reflectivity: f32,
    /// Upper bound of the random offset added to each mirror direction component
    diffusivity: f32,
}

impl Texture {
    /// Create a texture from any shader.
    ///
    /// - `reflectivity`: must lie strictly between 0 and 1
    /// - `diffusivity`: must lie in [0, 1], 0 = perfect mirror
    pub fn new(
        shader: impl Shader + 'static,
        reflectivity: f32,
        diffusivity: f32,
    ) -> Result<Self, SceneError> {
        // Written so NaN fails too
        if !(reflectivity > 0.0 && reflectivity < 1.0) {
            return Err(SceneError::InvalidMaterial(format!(
                "reflectivity {} is outside (0, 1)",
                reflectivity
            )));
        }
        if !Interval::UNIT.contains(diffusivity) {
            return Err(SceneError::InvalidMaterial(format!(
                "diffusivity {} is outside [0, 1]",
                diffusivity
            )));
        }

        Ok(Self {
            shader: Box::new(shader),
            reflectivity,
            diffusivity,
        })
    }

    /// Create a single-color texture.
    pub fn solid(color: Color, reflectivity: f32, diffusivity: f32) -> Result<Self, SceneError> {
        Self::new(SolidColor::new(color), reflectivity, diffusivity)
    }

    /// Local color for a ray hitting a surface with the given normal.
    #[inline]
    pub fn shade(&self, ray: &Ray, normal: Vec3) -> Color {
        self.shader.shade(ray, normal)
    }

    #[inline]
    pub fn reflectivity(&self) -> f32 {
        self.reflectivity
    }

    #[inline]
    pub fn diffusivity(&self) -> f32 {
        self.diffusivity
    }
}
