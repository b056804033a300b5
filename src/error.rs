//! Error taxonomy for the filter engine.
//!
//! The taxonomy is narrow: filters are pure arithmetic over a
//! pre-validated grid, so the only reportable failure is a grid too
//! small to filter. Channel overflow is clamped silently rather than
//! surfaced (see `filters::core::to_channel`).

/// Errors reported by filter application.
///
/// A failure is local to one call. Applying a sequence of filters stops
/// at the failing step; nothing panics and no partial output is exposed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The input grid has a zero dimension. Detected before iteration
    /// begins so the interior bound computation of neighborhood and
    /// geometric filters can never underflow.
    #[error("grid has invalid dimensions {width}x{height}; both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },
}
