//! ASCII art building blocks.
//!
//! The conversion runs in a fixed order:
//!
//! 1. **Contrast** - optional per-channel LUT adjustment
//! 2. **Brightness** - truncating mean of R, G and B per pixel
//! 3. **Bucketing** - brightness looked up in a [`RangeMap`] of ramp glyphs
//!
//! Resizing happens before all of this, using [`scaled_dimensions`] to pick
//! the target size.
//!
//! # Ramp
//!
//! [`BRIGHTNESS_RAMP`] holds 65 glyphs from sparsest to densest. The default
//! table splits [0, 255] into [`DEFAULT_BUCKETS`] intervals and uses the first
//! 64 glyphs.

mod brightness;
mod contrast;
mod dimensions;
mod glyphs;
mod ramp;
mod range_map;

pub use brightness::{channel_average, BrightnessMatrix};
pub use contrast::{adjust_contrast, contrast_lut};
pub use dimensions::{is_valid_scale, scaled_dimensions};
pub use glyphs::{AsciiArt, FALLBACK_GLYPH};
pub use ramp::{bucket_table, validate_buckets, BRIGHTNESS_RAMP, DEFAULT_BUCKETS, MAX_BRIGHTNESS};
pub use range_map::{Range, RangeMap, RangeMapError};
