use crate::Vec3;
use thiserror::Error;

/// Errors produced when building a ray.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RayError {
    #[error("Degenerate ray direction: {0}")]
    Degenerate(Vec3),
}

/// A ray in 3D space with an origin and a unit-length direction.
///
/// Every intersection routine assumes `|direction| == 1`, so the constructors
/// normalize whatever they are given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// The direction must be non-zero and finite. Use [`Ray::try_new`] when
    /// that is not already known.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0,
            "zero-length ray direction"
        );
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a new ray, rejecting zero-length or non-finite directions.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self, RayError> {
        let direction_n = direction.try_normalize().ok_or(RayError::Degenerate(direction))?;
        Ok(Self {
            origin,
            direction: direction_n,
        })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
