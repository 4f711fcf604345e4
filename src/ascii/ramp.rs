//! Glyph ramp and brightness bucket table.

use super::range_map::{Range, RangeMap, RangeMapError};
use crate::error::ConvertError;

/// Luminance-ordered glyph ramp, sparsest glyph first.
/// Bucket 0 (darkest pixels) maps to the first glyph.
pub const BRIGHTNESS_RAMP: &[char] = &[
    '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '~', '+', '_', '-', '?', ']', '[', '}',
    '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X',
    'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a',
    'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Default number of brightness buckets.
/// 255 / 64 gives buckets roughly four brightness levels wide.
pub const DEFAULT_BUCKETS: usize = 64;

/// Largest brightness value.
pub const MAX_BRIGHTNESS: i32 = 255;

/// Lower bound of bucket `k` out of `buckets`.
fn bucket_start(k: usize, buckets: usize) -> i32 {
    (MAX_BRIGHTNESS as usize * k / buckets) as i32
}

/// Build the brightness-to-glyph table.
///
/// Splits [0, 255] into `buckets` contiguous intervals. Bucket `k` starts at
/// `floor(255 * k / buckets)` and ends right before the next bucket; the last
/// bucket ends at 255. With `invert` the glyph order is reversed so bright
/// pixels get the sparse glyphs. `buckets` is clamped to the ramp length;
/// use [`validate_buckets`] to reject bad counts up front.
pub fn bucket_table(buckets: usize, invert: bool) -> Result<RangeMap<char>, RangeMapError> {
    let buckets = buckets.clamp(1, BRIGHTNESS_RAMP.len());

    let keys: Vec<Range> = (0..buckets)
        .map(|k| {
            let lower = bucket_start(k, buckets);
            let upper = if k + 1 == buckets {
                MAX_BRIGHTNESS
            } else {
                bucket_start(k + 1, buckets) - 1
            };
            Range::new(lower, upper)
        })
        .collect();

    let values: Vec<char> = (0..buckets)
        .map(|k| {
            let idx = if invert { buckets - 1 - k } else { k };
            BRIGHTNESS_RAMP[idx]
        })
        .collect();

    RangeMap::new(keys, values)
}

/// Check that a bucket count can be served by the ramp.
pub fn validate_buckets(buckets: usize) -> Result<usize, ConvertError> {
    if buckets == 0 || buckets > BRIGHTNESS_RAMP.len() {
        return Err(ConvertError::InvalidBuckets {
            requested: buckets,
            max: BRIGHTNESS_RAMP.len(),
        });
    }
    Ok(buckets)
}
