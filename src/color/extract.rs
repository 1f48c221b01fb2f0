//! Dominant color extraction from clothing photos.
//!
//! Works on decoded RGBA buffers: samples a subset of pixels, drops
//! background and highlight noise, quantizes the rest into coarse buckets,
//! and reports the most frequent bucket plus an optional distinct runner-up.

use std::collections::HashMap;

use image::RgbaImage;

use crate::color::{Rgb, distance};

/// Byte stride over the flat RGBA buffer; samples every 5th pixel.
pub const SAMPLE_STRIDE: usize = 20;

/// Pixels with alpha below this are treated as background.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Pixels with every channel below this are treated as shadow.
pub const NEAR_BLACK: u8 = 20;

/// Pixels with every channel above this are treated as highlight.
pub const NEAR_WHITE: u8 = 240;

/// Quantization step that bins similar shades together.
pub const QUANT_STEP: u32 = 16;

/// Minimum distance from the primary for a secondary color to count as
/// visually distinct.
pub const DISTINCT_DISTANCE: f64 = 100.0;

/// A secondary color must reach this share of the primary's frequency.
pub const SECONDARY_RATIO: f64 = 0.25;

/// Round a channel to the nearest multiple of [`QUANT_STEP`], saturating
/// at 255 (channels of 248 and above would otherwise round to 256).
fn quantize_channel(channel: u8) -> u8 {
    ((u32::from(channel) + QUANT_STEP / 2) / QUANT_STEP * QUANT_STEP).min(255) as u8
}

/// Extract one or two dominant colors from a decoded image.
///
/// Returns the most frequent quantized color, followed by the next most
/// frequent one that is both visually distinct (distance above
/// [`DISTINCT_DISTANCE`]) and common enough ([`SECONDARY_RATIO`] of the
/// primary's count). If every sampled pixel is filtered out, returns
/// exactly `[Rgb::WHITE]`.
pub fn extract_main_colors(image: &RgbaImage) -> Vec<Rgb> {
    let data = image.as_raw();
    let mut counts: HashMap<Rgb, u32> = HashMap::new();

    let mut i = 0;
    while i + 3 < data.len() {
        let (r, g, b, a) = (data[i], data[i + 1], data[i + 2], data[i + 3]);
        i += SAMPLE_STRIDE;

        if a < ALPHA_THRESHOLD {
            continue;
        }
        if r < NEAR_BLACK && g < NEAR_BLACK && b < NEAR_BLACK {
            continue;
        }
        if r > NEAR_WHITE && g > NEAR_WHITE && b > NEAR_WHITE {
            continue;
        }

        let quantized = Rgb::new(
            quantize_channel(r),
            quantize_channel(g),
            quantize_channel(b),
        );
        *counts.entry(quantized).or_insert(0) += 1;
    }

    // Count descending, then color value so equal counts order stably.
    let mut buckets: Vec<(Rgb, u32)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let Some(&(primary, primary_count)) = buckets.first() else {
        log::debug!("No usable pixels after filtering, falling back to white");
        return vec![Rgb::WHITE];
    };

    let mut colors = vec![primary];
    let count_floor = f64::from(primary_count) * SECONDARY_RATIO;
    for &(candidate, count) in &buckets[1..] {
        if distance(primary, candidate) > DISTINCT_DISTANCE && f64::from(count) > count_floor {
            colors.push(candidate);
            break;
        }
    }

    colors
}

/// Decode image bytes and extract dominant colors.
///
/// Decode failures are logged and produce the white fallback, so adding an
/// item never fails on a bad photo.
pub fn extract_from_bytes(bytes: &[u8]) -> Vec<Rgb> {
    match image::load_from_memory(bytes) {
        Ok(decoded) => extract_main_colors(&decoded.to_rgba8()),
        Err(e) => {
            log::warn!("Failed to decode image for color extraction: {e}");
            vec![Rgb::WHITE]
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn test_solid_red_image() {
        let image = solid_image(10, 10, [255, 0, 0, 255]);
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_quantization_bins_channels() {
        let image = solid_image(10, 10, [100, 150, 200, 255]);
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(96, 144, 208)]);
    }

    #[test]
    fn test_quantization_saturates_high_channels() {
        // 250 rounds to 256 without the clamp.
        let image = solid_image(10, 10, [250, 10, 10, 255]);
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(255, 16, 16)]);
    }

    #[test]
    fn test_transparent_image_falls_back_to_white() {
        let image = solid_image(10, 10, [255, 0, 0, 0]);
        assert_eq!(extract_main_colors(&image), vec![Rgb::WHITE]);
    }

    #[test]
    fn test_near_white_image_falls_back_to_white() {
        let image = solid_image(10, 10, [250, 250, 250, 255]);
        assert_eq!(extract_main_colors(&image), vec![Rgb::WHITE]);
    }

    #[test]
    fn test_near_black_image_falls_back_to_white() {
        let image = solid_image(10, 10, [5, 5, 5, 255]);
        assert_eq!(extract_main_colors(&image), vec![Rgb::WHITE]);
    }

    #[test]
    fn test_zero_sized_image_falls_back_to_white() {
        let image = RgbaImage::new(0, 0);
        assert_eq!(extract_main_colors(&image), vec![Rgb::WHITE]);
    }

    #[test]
    fn test_distinct_secondary_is_reported() {
        // 60 red pixels then 40 blue: the stride sees 12 red and 8 blue
        // samples, so blue clears the frequency floor and the distance gate.
        let image = RgbaImage::from_fn(10, 10, |x, y| {
            if y * 10 + x < 60 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_rare_secondary_is_dropped() {
        // Blue occupies a single sampled pixel: 1 of 20 samples is under
        // the 25% floor.
        let image = RgbaImage::from_fn(10, 10, |x, y| {
            if y * 10 + x == 95 {
                Rgba([0, 0, 255, 255])
            } else {
                Rgba([255, 0, 0, 255])
            }
        });
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_similar_secondary_is_dropped() {
        // Dark red is frequent but within the distance gate of red.
        let image = RgbaImage::from_fn(10, 10, |x, y| {
            if y * 10 + x < 60 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([208, 0, 0, 255])
            }
        });
        let colors = extract_main_colors(&image);
        assert_eq!(colors, vec![Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_at_most_two_colors() {
        let image = RgbaImage::from_fn(12, 12, |x, _| match x % 3 {
            0 => Rgba([255, 0, 0, 255]),
            1 => Rgba([0, 255, 0, 255]),
            _ => Rgba([0, 0, 255, 255]),
        });
        let colors = extract_main_colors(&image);
        assert!(!colors.is_empty() && colors.len() <= 2);
    }

    #[test]
    fn test_extract_from_bytes_decodes_png() {
        use std::io::Cursor;

        let image = solid_image(8, 8, [0, 128, 0, 255]);
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let colors = extract_from_bytes(&bytes);
        assert_eq!(colors, vec![Rgb::new(0, 128, 0)]);
    }

    #[test]
    fn test_extract_from_bytes_bad_data_falls_back() {
        assert_eq!(extract_from_bytes(b"definitely not an image"), vec![Rgb::WHITE]);
    }
}
