//! Edge detection filters.
//!
//! Two fixed-footprint variants that compare the brightness of a pixel
//! against one or two of its neighbours; neither is a configurable
//! kernel. The output grid starts as a copy of the input and only
//! interior pixels are reassigned, so the outermost one-pixel border
//! keeps its original colour.
//!
//! The two variants deliberately disagree on comparison direction:
//! `detect_edges` paints below-threshold contrast white, while
//! `detect_edges_better` paints above-threshold contrast black. They are
//! kept as independent filters with no shared decision code.

use crate::error::FilterError;
use crate::filters::core::{brightness, ensure_nonempty};
use crate::grid::{PixelGrid, Rgb};

#[inline]
fn pixel_brightness(grid: &PixelGrid, x: usize, y: usize) -> i32 {
    let px = grid.get(x, y);
    brightness(px.r, px.g, px.b) as i32
}

/// Detect edges by comparing each pixel with the pixel directly below.
///
/// For every interior pixel, `contrast` is the signed brightness
/// difference to the pixel below. Contrast below `threshold` paints the
/// pixel white, anything else black. Only the downward neighbour is
/// examined; vertical edges with no brightness change along columns go
/// undetected.
///
/// # Arguments
/// * `threshold` - Contrast at or above which a pixel is painted black
///
/// # Returns
/// A new grid of the same dimensions with the border row/column copied
/// from the input, or `InvalidDimensions` for an empty input.
pub fn detect_edges(input: &PixelGrid, threshold: f64) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;

    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let contrast = pixel_brightness(input, x, y) - pixel_brightness(input, x, y + 1);
            let color = if (contrast as f64) < threshold {
                Rgb::WHITE
            } else {
                Rgb::BLACK
            };
            output.set(x, y, color);
        }
    }

    Ok(output)
}

/// Detect edges by comparing each pixel with the pixels below and to the
/// right.
///
/// For every interior pixel, two signed contrasts are computed: against
/// the pixel below and against the pixel to the right. If either exceeds
/// `threshold` the pixel is painted black, otherwise white. Note the
/// comparison runs in the opposite direction to [`detect_edges`]; the
/// asymmetry is intentional.
///
/// # Arguments
/// * `threshold` - Contrast above which a pixel is painted black
///
/// # Returns
/// A new grid of the same dimensions with the border row/column copied
/// from the input, or `InvalidDimensions` for an empty input.
pub fn detect_edges_better(input: &PixelGrid, threshold: f64) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;

    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let here = pixel_brightness(input, x, y);
            let contrast_below = here - pixel_brightness(input, x, y + 1);
            let contrast_right = here - pixel_brightness(input, x + 1, y);

            let color = if (contrast_below as f64) > threshold
                || (contrast_right as f64) > threshold
            {
                Rgb::BLACK
            } else {
                Rgb::WHITE
            };
            output.set(x, y, color);
        }
    }

    Ok(output)
}
