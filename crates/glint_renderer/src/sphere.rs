//! Sphere primitive for ray tracing.

use glint_math::{Interval, Ray, Vec3};

use crate::{Hit, SceneError};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, SceneError> {
        if !center.is_finite() {
            return Err(SceneError::InvalidGeometry(format!(
                "sphere center {} is not finite",
                center
            )));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidGeometry(format!(
                "sphere radius {} must be positive and finite",
                radius
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Nearest non-negative intersection with a unit-direction ray.
    ///
    /// With `|D| = 1` the quadratic has `a = 1`. When the near root is behind
    /// the origin (the origin is inside the sphere) the far root is used.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = self.center - ray.origin();
        let b = -2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / 2.0;
        let far = (-b + sqrtd) / 2.0;

        let distance = if Interval::FORWARD.contains(near) {
            near
        } else if Interval::FORWARD.contains(far) {
            far
        } else {
            // Entirely behind the ray
            return None;
        };

        let normal = (ray.at(distance) - self.center).normalize();
        Some(Hit { distance, normal })
    }
}
