//! Image to ASCII conversion pipeline.
//!
//! decode → resize → contrast → brightness → glyph lookup

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader, RgbImage};

use crate::ascii::{
    adjust_contrast, bucket_table, is_valid_scale, scaled_dimensions, validate_buckets, AsciiArt,
    BrightnessMatrix, DEFAULT_BUCKETS,
};
use crate::error::ConvertError;

/// Largest image, in pixels, that resizing may produce (4096 x 4096).
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 24;

/// Options controlling how an image is turned into glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Resize factor applied to both sides (1.0 = no resize)
    pub scale: f64,
    /// Contrast percentage in [-100, 100] (0 = unchanged)
    pub contrast: f64,
    /// Number of brightness buckets, at most the ramp length
    pub buckets: usize,
    /// Reverse the ramp so bright pixels get sparse glyphs
    pub invert: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            contrast: 0.0,
            buckets: DEFAULT_BUCKETS,
            invert: false,
        }
    }
}

impl ConvertOptions {
    /// Check the options before any work is done.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !is_valid_scale(self.scale) {
            return Err(ConvertError::InvalidScale(self.scale));
        }
        if !self.contrast.is_finite() {
            return Err(ConvertError::InvalidContrast(self.contrast));
        }
        validate_buckets(self.buckets)?;
        Ok(())
    }
}

/// Open and decode an image file.
///
/// The format is detected from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decode_err = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    if img.width() == 0 || img.height() == 0 {
        return Err(ConvertError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    log::info!(
        "Decoded {}x{} image from {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(img)
}

/// Resize and contrast-adjust an image, returning 8-bit RGB pixels.
///
/// Alpha is dropped. Resizing only happens when `scale != 1.0` and uses a
/// Lanczos3 filter; contrast is applied after resizing. A resize that would
/// exceed [`MAX_OUTPUT_PIXELS`] fails before any buffer is allocated.
pub fn prepare_image(img: &DynamicImage, options: &ConvertOptions) -> Result<RgbImage, ConvertError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(ConvertError::NoPixels {
            width: img.width(),
            height: img.height(),
        });
    }

    let mut rgb = img.to_rgb8();

    if options.scale != 1.0 {
        let (width, height) = scaled_dimensions(rgb.width(), rgb.height(), options.scale)
            .ok_or(ConvertError::InvalidScale(options.scale))?;
        if u64::from(width) * u64::from(height) > MAX_OUTPUT_PIXELS {
            return Err(ConvertError::TooLarge {
                width,
                height,
                max: MAX_OUTPUT_PIXELS,
            });
        }
        log::debug!(
            "Resizing {}x{} -> {}x{} (scale {})",
            rgb.width(),
            rgb.height(),
            width,
            height,
            options.scale
        );
        rgb = image::imageops::resize(&rgb, width, height, FilterType::Lanczos3);
    }

    if options.contrast != 0.0 {
        log::debug!("Applying contrast {}", options.contrast);
        adjust_contrast(&mut rgb, options.contrast);
    }

    Ok(rgb)
}

/// Convert a decoded image into a glyph grid.
pub fn convert_image(img: &DynamicImage, options: &ConvertOptions) -> Result<AsciiArt, ConvertError> {
    options.validate()?;

    let rgb = prepare_image(img, options)?;
    let brightness = BrightnessMatrix::from_rgb(&rgb);
    let table = bucket_table(options.buckets, options.invert)?;
    let art = AsciiArt::from_brightness(&brightness, &table);

    log::info!(
        "Mapped {}x{} pixels onto {} buckets",
        art.width(),
        art.height(),
        table.len()
    );
    Ok(art)
}

/// Load an image file and convert it into a glyph grid.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<AsciiArt, ConvertError> {
    options.validate()?;
    let img = load_image(path)?;
    convert_image(&img, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gray_image(width: u32, height: u32, level: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([level, level, level])))
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.scale, 1.0);
        assert_eq!(options.contrast, 0.0);
        assert_eq!(options.buckets, 64);
        assert!(!options.invert);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let options = ConvertOptions {
            scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ConvertError::InvalidScale(_))));
    }

    #[test]
    fn test_validate_rejects_bad_buckets() {
        let options = ConvertOptions {
            buckets: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConvertError::InvalidBuckets { requested: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_contrast() {
        for contrast in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let options = ConvertOptions {
                contrast,
                ..Default::default()
            };
            assert!(
                matches!(options.validate(), Err(ConvertError::InvalidContrast(_))),
                "contrast {}",
                contrast
            );
        }
    }

    #[test]
    fn test_huge_scale_is_too_large() {
        let img = gray_image(4, 4, 100);
        let options = ConvertOptions {
            scale: 1e10,
            ..Default::default()
        };
        let err = convert_image(&img, &options).unwrap_err();
        assert!(matches!(err, ConvertError::TooLarge { max: MAX_OUTPUT_PIXELS, .. }));
    }

    #[test]
    fn test_pixel_limit_boundary() {
        // 1 x 1 scaled by 4096 lands exactly on the limit
        let (width, height) = scaled_dimensions(1, 1, 4096.0).unwrap();
        assert_eq!(u64::from(width) * u64::from(height), MAX_OUTPUT_PIXELS);

        let img = gray_image(1, 1, 0);
        let options = ConvertOptions {
            scale: 4097.0,
            ..Default::default()
        };
        assert!(matches!(
            prepare_image(&img, &options),
            Err(ConvertError::TooLarge { width: 4097, height: 4097, .. })
        ));
    }

    #[test]
    fn test_empty_image_is_no_pixels_not_bad_scale() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 4));
        let options = ConvertOptions {
            scale: 0.5,
            ..Default::default()
        };
        let err = convert_image(&img, &options).unwrap_err();
        assert!(matches!(err, ConvertError::NoPixels { width: 0, height: 4 }));

        let err = convert_image(&img, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoPixels { .. }));
    }

    #[test]
    fn test_prepare_keeps_size_at_unit_scale() {
        let img = gray_image(7, 5, 100);
        let rgb = prepare_image(&img, &ConvertOptions::default()).unwrap();
        assert_eq!(rgb.dimensions(), (7, 5));
        assert_eq!(rgb.get_pixel(3, 3), &Rgb([100, 100, 100]));
    }

    #[test]
    fn test_prepare_resizes() {
        let img = gray_image(10, 4, 100);
        let options = ConvertOptions {
            scale: 0.5,
            ..Default::default()
        };
        let rgb = prepare_image(&img, &options).unwrap();
        assert_eq!(rgb.dimensions(), (5, 2));
    }

    #[test]
    fn test_prepare_applies_contrast() {
        let img = gray_image(2, 2, 200);
        let options = ConvertOptions {
            contrast: 100.0,
            ..Default::default()
        };
        let rgb = prepare_image(&img, &options).unwrap();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_convert_uniform_gray() {
        let img = gray_image(4, 3, 0);
        let art = convert_image(&img, &ConvertOptions::default()).unwrap();
        assert_eq!(art.width(), 4);
        assert_eq!(art.height(), 3);
        assert!(art.glyphs().iter().all(|&c| c == '`'));
    }

    #[test]
    fn test_convert_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(2, 1, image::Rgba([255, 255, 255, 0]));
        let art = convert_image(&DynamicImage::ImageRgba8(rgba), &ConvertOptions::default())
            .unwrap();
        assert_eq!(art.glyphs(), &['@', '@']);
    }
}
