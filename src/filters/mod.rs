//! Filter modules for raster image transforms.
//!
//! ## Contract
//!
//! All filters follow the same principles:
//! - **Pure** - Read the input grid, write a freshly allocated output of
//!   identical dimensions; the input is never mutated and no state is
//!   kept across invocations
//! - **Typed failure** - Every filter returns `Result`; the only
//!   reportable error is a zero-dimension grid, rejected before any
//!   iteration begins
//! - **One truncation rule** - Fractional channel arithmetic funnels
//!   through `core::to_channel` (truncate toward zero, clamp to 0-255)
//!   at the final write
//!
//! ## Filter Categories
//!
//! - **Point**: every output pixel depends only on the input pixel at
//!   the same coordinate (`grayscale`, `stylize` modules). These map
//!   rows in parallel across the rayon thread pool.
//! - **Neighborhood**: every output pixel reads a fixed window of input
//!   neighbours (`edge`, `blur` modules). The outermost one-pixel border
//!   is copied from the input, not computed.
//! - **Geometric**: pixel coordinates are permuted, colours untouched
//!   (`geometry` module). Same copied-border policy.

pub mod core;

pub mod blur;
pub mod edge;
pub mod geometry;
pub mod grayscale;
pub mod stylize;

pub use blur::blur_better;
pub use edge::{detect_edges, detect_edges_better};
pub use geometry::{flip_horizontal, flip_vertical};
pub use grayscale::{grayscale, sepia_tint, weighted_grayscale};
pub use stylize::{
    black_and_white, black_and_white_and_gray, extreme_contrast, negative, posterize, solarize,
};
