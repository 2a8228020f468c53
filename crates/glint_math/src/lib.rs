// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
mod ray;

pub use color::Color;
pub use interval::Interval;
pub use ray::{Ray, RayError};

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
