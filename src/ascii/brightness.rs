//! Per-pixel brightness extraction.

use image::RgbImage;

/// Row-major grid of pixel brightness values (0-255).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessMatrix {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl BrightnessMatrix {
    /// Compute brightness for every pixel of an RGB image.
    ///
    /// Brightness is the plain mean of the three channels, truncated:
    /// `(r + g + b) / 3`. No gamma or perceptual weighting is applied.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let values = img
            .as_raw()
            .chunks_exact(3)
            .map(|rgb| channel_average(rgb[0], rgb[1], rgb[2]))
            .collect();

        Self {
            width,
            height,
            values,
        }
    }

    /// Build a matrix from raw row-major values.
    ///
    /// Returns `None` when `values.len()` doesn't equal `width * height`.
    pub fn from_raw(width: u32, height: u32, values: Vec<u8>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Brightness at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0
        self.values.chunks_exact(self.width.max(1) as usize)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

/// Truncating mean of three 8-bit channels.
#[inline]
pub fn channel_average(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}
