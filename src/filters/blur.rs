//! Box blur with a fixed 3x3 footprint.
//!
//! Not a configurable kernel: the window is always the pixel itself plus
//! its eight neighbours, equally weighted. The output starts as a copy
//! of the input and only interior pixels are reassigned, so the
//! outermost one-pixel border keeps its original colour.

use crate::error::FilterError;
use crate::filters::core::ensure_nonempty;
use crate::grid::{PixelGrid, Rgb};

/// Blur an image by averaging each interior pixel with its eight
/// neighbours.
///
/// Each channel is averaged independently with integer floor division
/// by nine.
///
/// # Returns
/// A new grid of the same dimensions with the border row/column copied
/// from the input, or `InvalidDimensions` for an empty input.
pub fn blur_better(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;

    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;

            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    let px = input.get(nx, ny);
                    sum_r += px.r as u32;
                    sum_g += px.g as u32;
                    sum_b += px.b as u32;
                }
            }

            output.set(
                x,
                y,
                Rgb::new((sum_r / 9) as u8, (sum_g / 9) as u8, (sum_b / 9) as u8),
            );
        }
    }

    Ok(output)
}
