//! Dimension calculation for scaled ASCII rendering.

/// Calculate the pixel dimensions of an image after scaling.
///
/// Each side is multiplied by `scale` and rounded to the nearest integer.
/// Results are clamped to at least 1 so a tiny scale never produces an empty
/// image.
///
/// # Arguments
/// * `width` - Width of the source image in pixels
/// * `height` - Height of the source image in pixels
/// * `scale` - Resize factor, must be positive and finite
///
/// # Returns
/// A tuple of (width, height), or `None` if `scale` is not a positive finite
/// number or either source dimension is zero.
///
/// # Example
/// ```ignore
/// // A 640x480 image at half scale becomes 320x240 characters
/// assert_eq!(scaled_dimensions(640, 480, 0.5), Some((320, 240)));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Option<(u32, u32)> {
    if width == 0 || height == 0 || !is_valid_scale(scale) {
        return None;
    }

    let scaled_width = scale_side(width, scale);
    let scaled_height = scale_side(height, scale);
    Some((scaled_width, scaled_height))
}

fn scale_side(side: u32, scale: f64) -> u32 {
    let scaled = (side as f64 * scale).round();
    // Clamp to the u32 range before casting
    scaled.clamp(1.0, u32::MAX as f64) as u32
}

/// Check that a scale factor is usable for resizing.
pub fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}
