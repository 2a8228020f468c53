//! Infinite horizontal floor plane.

use glint_math::{Ray, Vec3};

use crate::{Hit, SceneError};

/// The plane `y = height`, visible from both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    height: f32,
}

impl Floor {
    pub fn new(height: f32) -> Result<Self, SceneError> {
        if !height.is_finite() {
            return Err(SceneError::InvalidGeometry(format!(
                "floor height {} is not finite",
                height
            )));
        }
        Ok(Self { height })
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Intersect a unit-direction ray with the plane.
    ///
    /// The normal faces the side the ray comes from.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let offset = ray.origin().y - self.height;
        let dir_y = ray.direction().y;

        // Parallel, or heading away from the plane
        if offset * dir_y >= 0.0 {
            return None;
        }

        let distance = -offset / dir_y;
        let normal = if offset >= 0.0 { Vec3::Y } else { Vec3::NEG_Y };
        Some(Hit { distance, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_hit_from_above() {
        let floor = Floor::new(0.0).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);

        let hit = floor.intersect(&ray).unwrap();
        assert_eq!(hit.distance, 10.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_floor_hit_from_below() {
        let floor = Floor::new(-5.0).unwrap();
        let ray = Ray::new(Vec3::new(3.0, -7.0, 1.0), Vec3::Y);

        let hit = floor.intersect(&ray).unwrap();
        assert_eq!(hit.distance, 2.0);
        assert_eq!(hit.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_floor_slanted_ray() {
        let floor = Floor::new(-1.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 1.0));

        let hit = floor.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0_f32.sqrt()).abs() < 1e-6);
        assert!((ray.at(hit.distance).y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_floor_miss_parallel_or_away() {
        let floor = Floor::new(0.0).unwrap();

        let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z);
        assert_eq!(floor.intersect(&parallel), None);

        let away = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(floor.intersect(&away), None);

        let away_below = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::NEG_Y);
        assert_eq!(floor.intersect(&away_below), None);
    }

    #[test]
    fn test_floor_invalid_height() {
        assert!(matches!(Floor::new(f32::NAN), Err(SceneError::InvalidGeometry(_))));
        assert!(Floor::new(f32::NEG_INFINITY).is_err());
    }
}
