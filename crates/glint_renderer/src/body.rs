//! Bodies: one geometry plus one texture.

use glint_math::{Ray, Vec3};

use crate::{Floor, SceneError, Sphere, Texture};

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance from the ray origin along its unit direction
    pub distance: f32,
    /// Unit surface normal at the hit point
    pub normal: Vec3,
}

/// The closed set of shapes a body can have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
    Floor(Floor),
}

impl Geometry {
    /// Test a ray against the shape. A miss is `None`, never an error.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Geometry::Sphere(sphere) => sphere.intersect(ray),
            Geometry::Floor(floor) => floor.intersect(ray),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(data: Sphere) -> Self {
        Geometry::Sphere(data)
    }
}

impl From<Floor> for Geometry {
    fn from(data: Floor) -> Self {
        Geometry::Floor(data)
    }
}

/// Index of a body within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// A renderable object. Immutable once built.
pub struct Body {
    geometry: Geometry,
    texture: Texture,
}

impl Body {
    pub fn new(geometry: impl Into<Geometry>, texture: Texture) -> Self {
        Self {
            geometry: geometry.into(),
            texture,
        }
    }

    /// Sphere body. Fails for a non-positive radius.
    pub fn sphere(center: Vec3, radius: f32, texture: Texture) -> Result<Self, SceneError> {
        Ok(Self::new(Sphere::new(center, radius)?, texture))
    }

    /// Floor body at the given height.
    pub fn floor(height: f32, texture: Texture) -> Result<Self, SceneError> {
        Ok(Self::new(Floor::new(height)?, texture))
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.geometry.intersect(ray)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}
