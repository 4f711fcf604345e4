//! Contrast adjustment via a per-channel lookup table.

use image::RgbImage;

/// Build the contrast lookup table for a percentage in [-100, 100].
///
/// Values outside the range are clamped and NaN is treated as zero. Positive values stretch tones away
/// from mid-gray, negative values pull them toward it. At +100 the table
/// becomes a hard threshold at 128.
pub fn contrast_lut(percentage: f64) -> [u8; 256] {
    if percentage.is_nan() {
        return contrast_lut(0.0);
    }
    let percentage = percentage.clamp(-100.0, 100.0);
    let v = (100.0 + percentage) / 100.0;

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f64 / 255.0;
        *entry = if (0.0..=1.0).contains(&v) {
            clamp_channel((0.5 + (x - 0.5) * v) * 255.0)
        } else if v > 1.0 && v < 2.0 {
            clamp_channel((0.5 + (x - 0.5) * (1.0 / (2.0 - v))) * 255.0)
        } else if i < 128 {
            0
        } else {
            255
        };
    }
    lut
}

/// Round half up and clamp to the channel range.
fn clamp_channel(x: f64) -> u8 {
    (x + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Apply a contrast adjustment to every RGB channel in place.
///
/// A percentage of zero leaves the image untouched.
pub fn adjust_contrast(img: &mut RgbImage, percentage: f64) {
    if percentage == 0.0 {
        return;
    }
    let lut = contrast_lut(percentage);
    for channel in img.iter_mut() {
        *channel = lut[*channel as usize];
    }
}
