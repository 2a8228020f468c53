//! Camera for ray generation.

use glint_core::CameraDescription;
use glint_math::{Ray, Vec3};

use crate::{RenderError, RenderResult};

/// Pinhole camera looking down `+Z` with `+Y` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    // Image settings
    width: u32,
    height: u32,

    // Camera positioning
    position: Vec3,
    fov_degrees: f32, // Vertical field of view

    // Half extents of the image plane at z = 1
    half_width: f32,
    half_height: f32,
}

impl Camera {
    /// Create a new camera.
    ///
    /// Width and height must be non-zero and the vertical field of view must
    /// lie in (0, 180) degrees.
    pub fn new(width: u32, height: u32, fov_degrees: f32, position: Vec3) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidCamera(format!(
                "resolution {}x{} has no pixels",
                width, height
            )));
        }
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(RenderError::InvalidCamera(format!(
                "field of view {} is outside (0, 180) degrees",
                fov_degrees
            )));
        }
        if !position.is_finite() {
            return Err(RenderError::InvalidCamera(format!(
                "position {} is not finite",
                position
            )));
        }

        let half_height = (fov_degrees.to_radians() / 2.0).tan();
        let aspect = width as f32 / height as f32;

        Ok(Self {
            width,
            height,
            position,
            fov_degrees,
            half_width: half_height * aspect,
            half_height,
        })
    }

    pub fn from_description(desc: &CameraDescription) -> RenderResult<Self> {
        Self::new(desc.width, desc.height, desc.fov_degrees, desc.position)
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// Row 0 is the top of the image.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let u = 2.0 * (x as f32 + 0.5) / self.width as f32 - 1.0;
        let v = 1.0 - 2.0 * (y as f32 + 0.5) / self.height as f32;

        let direction = Vec3::new(u * self.half_width, v * self.half_height, 1.0);
        Ray::new(self.position, direction)
    }
}
