//! Error types for image conversion and output.

use std::path::PathBuf;

use crate::ascii::RangeMapError;

/// Errors that can occur while converting an image or writing the result.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to open image '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image '{}' has no pixels", .path.display())]
    EmptyImage { path: PathBuf },

    #[error("Image has no pixels ({width}x{height})")]
    NoPixels { width: u32, height: u32 },

    #[error("Failed to create output file '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write to {target}: {source}")]
    Write {
        /// Human-readable sink name, a file path or `stdout`
        target: String,
        source: std::io::Error,
    },

    #[error("Scale must be a positive number, got {0}")]
    InvalidScale(f64),

    #[error("Scaled image of {width}x{height} exceeds the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u64 },

    #[error("Contrast must be a finite number, got {0}")]
    InvalidContrast(f64),

    #[error("Bucket count must be between 1 and {max}, got {requested}")]
    InvalidBuckets { requested: usize, max: usize },

    #[error("Invalid brightness table: {0}")]
    Table(#[from] RangeMapError),
}
