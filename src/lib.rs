//! ascii-ramp library crate.
//!
//! Converts raster images into ASCII art by bucketing per-pixel brightness
//! onto a fixed glyph ramp. The binary wraps this with a CLI; the modules are
//! public so integration tests can drive the pipeline directly.

pub mod ascii;
pub mod config;
pub mod convert;
pub mod error;
pub mod render;
