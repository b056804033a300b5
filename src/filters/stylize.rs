//! Tonal point filters: Negative, Solarize, two- and three-tone
//! reduction, Extreme Contrast, Posterize.
//!
//! Each filter allocates a fresh output grid and maps every input pixel
//! independently. Filters that decide per channel (`negative`,
//! `solarize`, `extreme_contrast`, `posterize`) can produce mixed
//! colours; the tone-reduction filters decide on the combined pixel
//! brightness and always emit pure black/gray/white.

use crate::error::FilterError;
use crate::filters::core::{brightness, ensure_nonempty, map_pixels, quadrant_midpoint};
use crate::grid::{PixelGrid, Rgb};

// ============================================================================
// Negative / Solarize
// ============================================================================

/// Invert every channel of every pixel (colour negative).
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn negative(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
    }))
}

/// Invert only the channels whose intensity is below `threshold`.
///
/// Channels are solarized independently, not on combined brightness.
/// The documented threshold range is 0 to 256 inclusive; values outside
/// it degrade gracefully rather than fail: at or below 0 nothing is
/// inverted (identity), at or above 256 everything is (equals
/// [`negative`]).
///
/// # Arguments
/// * `threshold` - Intensity below which a channel is inverted
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn solarize(input: &PixelGrid, threshold: i32) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    let flip = |c: u8| if (c as i32) < threshold { 255 - c } else { c };
    Ok(map_pixels(input, move |px| {
        Rgb::new(flip(px.r), flip(px.g), flip(px.b))
    }))
}

// ============================================================================
// Tone reduction
// ============================================================================

/// Reduce an image to pure black and white (two-tone).
///
/// Pixels with brightness in the lower half of the 0-255 range become
/// black, the rest white.
pub fn black_and_white(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        if brightness(px.r, px.g, px.b) < 128 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }))
}

/// Reduce an image to black, mid-gray and white (three-tone).
///
/// Brightness below 85 becomes black, 85 to 170 becomes (128, 128, 128),
/// 171 and above becomes white.
pub fn black_and_white_and_gray(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        let level = brightness(px.r, px.g, px.b);
        if level < 85 {
            Rgb::BLACK
        } else if level < 171 {
            Rgb::splat(128)
        } else {
            Rgb::WHITE
        }
    }))
}

/// Maximize contrast by snapping each channel to 0 or 255.
///
/// Channels are thresholded independently at 128, so a pixel maps to one
/// of eight corner colours rather than just black or white.
pub fn extreme_contrast(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    let snap = |c: u8| if c < 128 { 0 } else { 255 };
    Ok(map_pixels(input, move |px| {
        Rgb::new(snap(px.r), snap(px.g), snap(px.b))
    }))
}

// ============================================================================
// Posterize
// ============================================================================

/// Posterize an image to four levels per channel.
///
/// Each channel is replaced by the midpoint of its quadrant of the 0-255
/// range (31, 95, 159 or 223).
pub fn posterize(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;
    Ok(map_pixels(input, |px| {
        Rgb::new(
            quadrant_midpoint(px.r),
            quadrant_midpoint(px.g),
            quadrant_midpoint(px.b),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_inverts_channels() {
        let input = PixelGrid::filled(1, 1, Rgb::new(10, 128, 250));
        let result = negative(&input).unwrap();
        assert_eq!(result.get(0, 0), Rgb::new(245, 127, 5));
    }

    #[test]
    fn test_negative_involution() {
        let input = PixelGrid::from_fn(6, 5, |x, y| {
            Rgb::new((x * 37) as u8, (y * 51) as u8, ((x + y) * 11) as u8)
        });

        let twice = negative(&negative(&input).unwrap()).unwrap();
        assert_eq!(twice, input);
    }

    #[test]
    fn test_solarize_zero_is_identity() {
        let input = PixelGrid::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 77));
        let result = solarize(&input, 0).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_solarize_256_equals_negative() {
        let input = PixelGrid::from_fn(4, 4, |x, y| {
            Rgb::new((x * 63) as u8, (y * 80) as u8, 200)
        });

        assert_eq!(
            solarize(&input, 256).unwrap(),
            negative(&input).unwrap()
        );
    }

    #[test]
    fn test_solarize_channels_independent() {
        let input = PixelGrid::filled(1, 1, Rgb::new(50, 128, 200));
        let result = solarize(&input, 128).unwrap();

        // Only the channel below 128 is inverted
        assert_eq!(result.get(0, 0), Rgb::new(205, 128, 200));
    }

    #[test]
    fn test_solarize_out_of_range_degrades() {
        let input = PixelGrid::filled(2, 2, Rgb::new(40, 90, 210));
        assert_eq!(solarize(&input, -50).unwrap(), input);
        assert_eq!(solarize(&input, 400).unwrap(), negative(&input).unwrap());
    }

    #[test]
    fn test_black_and_white_split() {
        let input = PixelGrid::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb::splat(127) } else { Rgb::splat(128) }
        });
        let result = black_and_white(&input).unwrap();

        assert_eq!(result.get(0, 0), Rgb::BLACK);
        assert_eq!(result.get(1, 0), Rgb::WHITE);
    }

    #[test]
    fn test_black_and_white_and_gray_bands() {
        let input = PixelGrid::from_fn(4, 1, |x, _| match x {
            0 => Rgb::splat(84),
            1 => Rgb::splat(85),
            2 => Rgb::splat(170),
            _ => Rgb::splat(171),
        });
        let result = black_and_white_and_gray(&input).unwrap();

        assert_eq!(result.get(0, 0), Rgb::BLACK);
        assert_eq!(result.get(1, 0), Rgb::splat(128));
        assert_eq!(result.get(2, 0), Rgb::splat(128));
        assert_eq!(result.get(3, 0), Rgb::WHITE);
    }

    #[test]
    fn test_tri_tone_mid_gray_fixed_point() {
        // 128 falls in the middle band, so an all-mid-gray image is unchanged
        let input = PixelGrid::filled(3, 3, Rgb::splat(128));
        assert_eq!(black_and_white_and_gray(&input).unwrap(), input);
    }

    #[test]
    fn test_extreme_contrast_corner_colors() {
        let input = PixelGrid::filled(1, 1, Rgb::new(127, 128, 30));
        let result = extreme_contrast(&input).unwrap();
        assert_eq!(result.get(0, 0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_extreme_contrast_mid_gray_goes_white() {
        let input = PixelGrid::filled(3, 3, Rgb::splat(128));
        let result = extreme_contrast(&input).unwrap();
        assert!(result.pixels().all(|(_, _, px)| px == Rgb::WHITE));
    }

    #[test]
    fn test_posterize_mid_gray() {
        let input = PixelGrid::filled(3, 3, Rgb::splat(128));
        let result = posterize(&input).unwrap();
        assert!(result.pixels().all(|(_, _, px)| px == Rgb::splat(159)));
    }

    #[test]
    fn test_posterize_mixed_channels() {
        let input = PixelGrid::filled(1, 1, Rgb::new(10, 64, 230));
        let result = posterize(&input).unwrap();
        assert_eq!(result.get(0, 0), Rgb::new(31, 95, 223));
    }

    #[test]
    fn test_dimension_preservation_and_immutability() {
        let input = PixelGrid::from_fn(5, 7, |x, y| Rgb::new((x * x) as u8, y as u8, 3));
        let before = input.clone();

        for result in [
            negative(&input).unwrap(),
            solarize(&input, 128).unwrap(),
            black_and_white(&input).unwrap(),
            black_and_white_and_gray(&input).unwrap(),
            extreme_contrast(&input).unwrap(),
            posterize(&input).unwrap(),
        ] {
            assert_eq!(result.width(), 5);
            assert_eq!(result.height(), 7);
        }
        assert_eq!(input, before);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let empty = PixelGrid::new(3, 0);
        assert!(negative(&empty).is_err());
        assert!(solarize(&empty, 128).is_err());
        assert!(black_and_white(&empty).is_err());
        assert!(black_and_white_and_gray(&empty).is_err());
        assert!(extreme_contrast(&empty).is_err());
        assert!(posterize(&empty).is_err());
    }
}
