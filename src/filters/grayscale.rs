//! Grayscale conversion filters.
//!
//! Two conversions plus the sepia tint that builds on the weighted one:
//! - `grayscale` uses the floor-averaged brightness of each pixel
//! - `weighted_grayscale` uses ITU-R 601 luminance weights
//! - `sepia_tint` re-tints the weighted grayscale toward brown
//!
//! All three are point filters: every output pixel depends only on the
//! input pixel at the same coordinate, and the output is a freshly
//! allocated grid of identical dimensions.

use crate::error::FilterError;
use crate::filters::core::{brightness, ensure_nonempty, map_pixels, to_channel, weighted_luminance};
use crate::grid::{PixelGrid, Rgb};

/// Convert an image to grayscale using per-pixel brightness.
///
/// All three channels of each output pixel are set to the floor-averaged
/// brightness of the input pixel, so the gray shade keeps approximately
/// the same brightness as the original colour.
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn grayscale(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        Rgb::splat(brightness(px.r, px.g, px.b))
    }))
}

/// Convert an image to grayscale using ITU-R 601 luminance weights.
///
/// Perceptually closer to how bright a colour looks than the plain
/// channel average: green contributes most, blue least. The weighted
/// value stays a real number until the final channel write truncates it.
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn weighted_grayscale(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        Rgb::splat(to_channel(weighted_luminance(px.r, px.g, px.b)))
    }))
}

/// Convert an image to sepia tones.
///
/// First converts the pixel to weighted grayscale, then scales the red
/// channel up and the blue channel down by an amount chosen per tonal
/// band of the gray value; green keeps the gray value. The scaled
/// channels are truncated and clamped on write, so the brightest band
/// saturates red at 255 instead of overflowing.
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn sepia_tint(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        let gray = to_channel(weighted_luminance(px.r, px.g, px.b));
        let (r, b) = if gray < 63 {
            (gray as f64 * 1.1, gray as f64 * 0.9)
        } else if gray < 191 {
            (gray as f64 * 1.15, gray as f64 * 0.85)
        } else {
            (gray as f64 * 1.08, gray as f64 * 0.93)
        };
        Rgb::new(to_channel(r), gray, to_channel(b))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_channels_equal() {
        let input = PixelGrid::filled(2, 2, Rgb::new(200, 100, 50));
        let result = grayscale(&input).unwrap();

        // (200 + 100 + 50) / 3 = 116
        assert!(result.pixels().all(|(_, _, px)| px == Rgb::splat(116)));
    }

    #[test]
    fn test_grayscale_idempotent() {
        let input = PixelGrid::from_fn(5, 4, |x, y| {
            Rgb::new((x * 40) as u8, (y * 60) as u8, 200)
        });

        let once = grayscale(&input).unwrap();
        let twice = grayscale(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grayscale_preserves_dimensions_and_input() {
        let input = PixelGrid::from_fn(7, 3, |x, y| Rgb::new(x as u8, y as u8, 9));
        let before = input.clone();
        let result = grayscale(&input).unwrap();

        assert_eq!(result.width(), 7);
        assert_eq!(result.height(), 3);
        assert_eq!(input, before);
    }

    #[test]
    fn test_weighted_grayscale_known_values() {
        let input = PixelGrid::filled(1, 1, Rgb::new(200, 100, 50));
        let result = weighted_grayscale(&input).unwrap();

        // 0.299*200 + 0.587*100 + 0.114*50 = 124.2, truncated to 124
        assert_eq!(result.get(0, 0), Rgb::splat(124));
    }

    #[test]
    fn test_weighted_grayscale_pure_channels() {
        let red = weighted_grayscale(&PixelGrid::filled(1, 1, Rgb::new(255, 0, 0))).unwrap();
        let green = weighted_grayscale(&PixelGrid::filled(1, 1, Rgb::new(0, 255, 0))).unwrap();

        // 0.299 * 255 = 76.245 -> 76; 0.587 * 255 = 149.685 -> 149
        assert_eq!(red.get(0, 0), Rgb::splat(76));
        assert_eq!(green.get(0, 0), Rgb::splat(149));
    }

    #[test]
    fn test_sepia_dark_band() {
        // (100, 0, 0) -> gray 29 (0.299 * 100 = 29.9), dark band
        let input = PixelGrid::filled(1, 1, Rgb::new(100, 0, 0));
        let result = sepia_tint(&input).unwrap();

        // r = 29 * 1.1 = 31.9 -> 31, b = 29 * 0.9 = 26.1 -> 26
        assert_eq!(result.get(0, 0), Rgb::new(31, 29, 26));
    }

    #[test]
    fn test_sepia_mid_band() {
        // (0, 255, 0) -> gray 149, mid band
        let input = PixelGrid::filled(1, 1, Rgb::new(0, 255, 0));
        let result = sepia_tint(&input).unwrap();

        // r = 149 * 1.15 = 171.35 -> 171, b = 149 * 0.85 = 126.65 -> 126
        assert_eq!(result.get(0, 0), Rgb::new(171, 149, 126));
    }

    #[test]
    fn test_sepia_light_band() {
        // (255, 255, 0) -> gray 225, light band
        let input = PixelGrid::filled(1, 1, Rgb::new(255, 255, 0));
        let result = sepia_tint(&input).unwrap();

        // r = 225 * 1.08 = 243, b = 225 * 0.93 = 209.25 -> 209
        assert_eq!(result.get(0, 0), Rgb::new(243, 225, 209));
    }

    #[test]
    fn test_sepia_red_clamps_at_white() {
        let input = PixelGrid::filled(1, 1, Rgb::WHITE);
        let result = sepia_tint(&input).unwrap();

        // Scaling the brightest gray by 1.08 exceeds 255 and clamps
        assert_eq!(result.get(0, 0).r, 255);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let empty = PixelGrid::new(0, 3);
        assert!(matches!(
            grayscale(&empty),
            Err(FilterError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(weighted_grayscale(&empty).is_err());
        assert!(sepia_tint(&empty).is_err());
    }
}
