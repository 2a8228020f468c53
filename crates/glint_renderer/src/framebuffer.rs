//! Framebuffer and image output.
//!
//! The plain-text output is PPM (`P3`): a header with the size and maximum
//! channel value, then one text line per image row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glint_math::Color;

use crate::{Bucket, RenderError, RenderResult};

/// Row-major grid of final pixel colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    ///
    /// Allocation is fallible: an image too large for memory is reported as
    /// `RenderError::AllocationFailure` rather than aborting.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let failure = || RenderError::AllocationFailure { width, height };

        let len = (width as usize).checked_mul(height as usize).ok_or_else(failure)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| failure())?;
        pixels.resize(len, Color::BLACK);

        Ok(Self { width, height, pixels })
    }

    /// Wrap existing row-major pixels.
    ///
    /// Returns `None` when the pixel count doesn't match the size.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Copy a rendered bucket's row-major pixels into place.
    pub fn write_bucket(&mut self, bucket: &Bucket, pixels: &[Color]) {
        debug_assert_eq!(pixels.len(), bucket.pixel_count());

        for (row, line) in pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + line.len()].copy_from_slice(line);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed 8-bit RGB.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }

    /// Write the image as plain-text PPM.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for row in self.pixels.chunks(self.width as usize) {
            let line = row
                .iter()
                .map(|c| {
                    let [r, g, b] = c.to_rgb8();
                    format!("{} {} {}", r, g, b)
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{}", line)?;
        }

        writer.flush()
    }

    /// Save as plain-text PPM.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_ppm(BufWriter::new(file))?;
        log::info!("Saved {}", path.as_ref().display());
        Ok(())
    }

    /// Save as 8-bit PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let image = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get(x, y).to_rgb8())
        });
        image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::info!("Saved {}", path.as_ref().display());
        Ok(())
    }

    /// Save, picking PNG for a `.png` extension and PPM otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));

        if is_png {
            self.save_png(path)
        } else {
            self.save_ppm(path)
        }
    }
}
