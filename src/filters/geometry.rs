//! Geometric filters: vertical and horizontal flips.
//!
//! These permute pixel coordinates without altering any colour. The
//! output starts as a copy of the input and only interior pixels are
//! rewritten, so the outermost one-pixel frame is never flipped.
//! Interior coordinates mirror onto interior coordinates, so every
//! write stays inside the frame.

use crate::error::FilterError;
use crate::filters::core::ensure_nonempty;
use crate::grid::PixelGrid;

/// Flip the image around an imaginary vertical line through its
/// midpoint.
///
/// Each interior pixel `(x, y)` lands at `(width - x - 1, y)` in the
/// output; the one-pixel frame keeps its original colours.
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn flip_vertical(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;

    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            output.set(width - x - 1, y, input.get(x, y));
        }
    }

    Ok(output)
}

/// Flip the image around an imaginary horizontal line through its
/// midpoint.
///
/// Each interior pixel `(x, y)` lands at `(x, height - y - 1)` in the
/// output; the one-pixel frame keeps its original colours.
///
/// # Returns
/// A new grid of the same dimensions, or `InvalidDimensions` for an
/// empty input.
pub fn flip_horizontal(input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    ensure_nonempty(input)?;

    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            output.set(x, height - y - 1, input.get(x, y));
        }
    }

    Ok(output)
}
