//! rasterfx
//!
//! Deterministic raster image filters over an owned RGB pixel grid.
//!
//! ## Image Format
//!
//! Images are [`PixelGrid`] values: a rectangular array of [`Rgb`]
//! pixels (three 8-bit channels) with fixed dimensions, indexed by
//! `(x, y)` from the top-left corner. The crate performs no I/O -
//! decoding bytes into a grid and encoding, displaying or persisting a
//! filtered grid are the host application's job, attached through
//! `PixelGrid::from_raw` and `PixelGrid::raw`.
//!
//! ## Filter Architecture
//!
//! Every filter is a pure function from one grid to a freshly allocated
//! grid of identical dimensions; inputs are never mutated and no state
//! survives a call. Point filters map pixels independently (rows fan out
//! across the rayon thread pool); neighborhood filters read a fixed 3x3
//! or 2-pixel footprint and leave the outermost one-pixel border
//! untouched; geometric filters permute interior coordinates without
//! changing colours.
//!
//! Hosts usually go through the [`Filter`] enum:
//!
//! ```
//! use rasterfx::{Filter, PixelGrid, Rgb};
//!
//! let image = PixelGrid::filled(16, 16, Rgb::new(200, 100, 50));
//! let sepia = Filter::SepiaTint.apply(&image)?;
//! assert_eq!(sepia.width(), 16);
//! # Ok::<(), rasterfx::FilterError>(())
//! ```
//!
//! The free functions in [`filters`] are the same transforms without the
//! enum indirection.

pub mod engine;
pub mod error;
pub mod filters;
pub mod grid;

pub use engine::{apply_all, Filter};
pub use error::FilterError;
pub use grid::{PixelGrid, Rgb};
