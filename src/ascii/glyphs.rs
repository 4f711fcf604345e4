//! Brightness to glyph mapping.

use super::brightness::BrightnessMatrix;
use super::range_map::RangeMap;

/// Glyph used when a brightness value falls outside every bucket.
pub const FALLBACK_GLYPH: char = ' ';

/// A grid of glyphs, one per source pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
}

impl AsciiArt {
    /// Map every brightness value in `matrix` through `table`.
    ///
    /// Values that no bucket claims render as [`FALLBACK_GLYPH`], which keeps
    /// every row the same width.
    pub fn from_brightness(matrix: &BrightnessMatrix, table: &RangeMap<char>) -> Self {
        let glyphs = matrix
            .as_slice()
            .iter()
            .map(|&b| table.get(b as i32).copied().unwrap_or(FALLBACK_GLYPH))
            .collect();

        Self {
            width: matrix.width() as usize,
            height: matrix.height() as usize,
            glyphs,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate over glyph rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks_exact(self.width.max(1))
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}
