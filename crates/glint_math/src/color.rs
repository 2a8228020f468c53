//! Clamped RGB color.
//!
//! Every operation that produces a `Color` clamps each channel into `[0, 1]`,
//! so a color can be handed to the output sink without further checks.

use std::ops::{Add, Mul};

use crate::{Interval, Vec3};

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(Vec3);

impl Color {
    pub const BLACK: Color = Color(Vec3::ZERO);
    pub const WHITE: Color = Color(Vec3::ONE);

    /// Create a color, clamping each channel into `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::from_vec3(Vec3::new(r, g, b))
    }

    /// Create a color from a vector of channels, clamping each into `[0, 1]`.
    ///
    /// NaN channels become 0.
    pub fn from_vec3(v: Vec3) -> Self {
        let channel = |c: f32| if c.is_nan() { 0.0 } else { Interval::UNIT.clamp(c) };
        Self(Vec3::new(channel(v.x), channel(v.y), channel(v.z)))
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0.z
    }

    /// Channels as a plain vector.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        self.0
    }

    /// Convert to 8-bit channels, `trunc(c * 255.999)`.
    pub fn to_rgb8(self) -> [u8; 3] {
        // `as u8` saturates, so the result always lands in [0, 255]
        [
            (self.0.x * 255.999) as u8,
            (self.0.y * 255.999) as u8,
            (self.0.z * 255.999) as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::from_vec3(self.0 + rhs.0)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::from_vec3(self.0 * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}
