//! The filter engine facade.
//!
//! External callers go through [`Filter`]: one enum variant per
//! transform, with the parameterized filters carrying their scalar.
//! [`Filter::apply`] dispatches to the filter modules and is the only
//! entry point a host application needs; [`apply_all`] chains several
//! filters and stops at the first failing step.

use crate::error::FilterError;
use crate::filters;
use crate::grid::PixelGrid;

/// A filter selection, ready to apply to any grid.
///
/// `Filter` values are plain data: cheap to copy, compare and store in a
/// pipeline description. Applying one never mutates the input grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Brightness-averaged grayscale.
    Grayscale,
    /// ITU-R 601 weighted grayscale.
    WeightedGrayscale,
    /// Per-channel colour inversion.
    Negative,
    /// Invert channels below the threshold (documented range 0-256).
    Solarize { threshold: i32 },
    /// Two-tone reduction on pixel brightness.
    BlackAndWhite,
    /// Three-tone reduction on pixel brightness.
    BlackAndWhiteAndGray,
    /// Snap each channel independently to 0 or 255.
    ExtremeContrast,
    /// Weighted grayscale re-tinted toward brown.
    SepiaTint,
    /// Four-level quadrant posterization per channel.
    Posterize,
    /// Below-neighbour edge detection.
    DetectEdges { threshold: f64 },
    /// Below- and right-neighbour edge detection.
    DetectEdgesBetter { threshold: f64 },
    /// 3x3 box blur.
    BlurBetter,
    /// Mirror around the vertical midline (interior only).
    FlipVertical,
    /// Mirror around the horizontal midline (interior only).
    FlipHorizontal,
}

impl Filter {
    /// Stable identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::WeightedGrayscale => "weighted_grayscale",
            Filter::Negative => "negative",
            Filter::Solarize { .. } => "solarize",
            Filter::BlackAndWhite => "black_and_white",
            Filter::BlackAndWhiteAndGray => "black_and_white_and_gray",
            Filter::ExtremeContrast => "extreme_contrast",
            Filter::SepiaTint => "sepia_tint",
            Filter::Posterize => "posterize",
            Filter::DetectEdges { .. } => "detect_edges",
            Filter::DetectEdgesBetter { .. } => "detect_edges_better",
            Filter::BlurBetter => "blur_better",
            Filter::FlipVertical => "flip_vertical",
            Filter::FlipHorizontal => "flip_horizontal",
        }
    }

    /// Apply this filter to `input`, producing a new grid of the same
    /// dimensions.
    ///
    /// # Returns
    /// The filtered grid, or `InvalidDimensions` if the input has a zero
    /// dimension.
    pub fn apply(&self, input: &PixelGrid) -> Result<PixelGrid, FilterError> {
        log::debug!(
            "applying {} to {}x{} grid",
            self.name(),
            input.width(),
            input.height()
        );

        match *self {
            Filter::Grayscale => filters::grayscale(input),
            Filter::WeightedGrayscale => filters::weighted_grayscale(input),
            Filter::Negative => filters::negative(input),
            Filter::Solarize { threshold } => filters::solarize(input, threshold),
            Filter::BlackAndWhite => filters::black_and_white(input),
            Filter::BlackAndWhiteAndGray => filters::black_and_white_and_gray(input),
            Filter::ExtremeContrast => filters::extreme_contrast(input),
            Filter::SepiaTint => filters::sepia_tint(input),
            Filter::Posterize => filters::posterize(input),
            Filter::DetectEdges { threshold } => filters::detect_edges(input, threshold),
            Filter::DetectEdgesBetter { threshold } => {
                filters::detect_edges_better(input, threshold)
            }
            Filter::BlurBetter => filters::blur_better(input),
            Filter::FlipVertical => filters::flip_vertical(input),
            Filter::FlipHorizontal => filters::flip_horizontal(input),
        }
    }
}

/// Apply a sequence of filters, feeding each output into the next.
///
/// Stops at the first failing step and reports its error; earlier
/// results are dropped. An empty sequence returns a copy of the input.
pub fn apply_all(pipeline: &[Filter], input: &PixelGrid) -> Result<PixelGrid, FilterError> {
    let mut current = input.clone();
    for filter in pipeline {
        current = filter.apply(&current)?;
    }
    Ok(current)
}
