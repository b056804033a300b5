//! Core utilities shared by the filter modules.
//!
//! This module provides the numeric helpers every filter builds on:
//! - Brightness (floor-averaged channel mean)
//! - Weighted luminance (ITU-R 601 coefficients)
//! - Channel clamping and the real-to-channel conversion
//! - Quadrant bucketing for posterization
//! - The parallel per-pixel mapping loop used by all point filters

use rayon::prelude::*;

use crate::error::FilterError;
use crate::grid::{PixelGrid, Rgb};

/// ITU-R 601 luma coefficients.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Brightness of a pixel: the floor-averaged mean of its channels.
///
/// Uses integer floor division, so e.g. `(1, 1, 0)` has brightness 0.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Perceptually weighted luminance using ITU-R 601 coefficients.
///
/// Kept as a real number; convert with [`to_channel`] when storing the
/// result in a pixel.
#[inline]
pub fn weighted_luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Clamp an integer channel value to the valid 0-255 range.
#[inline]
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Convert a real channel value to a stored channel.
///
/// Truncates toward zero, clamped to 0-255. Every filter that computes
/// fractional channel values funnels its final write through this one
/// conversion.
#[inline]
pub fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Map a channel value to the midpoint of its quadrant of 0-255.
///
/// The four buckets are `[0, 64)`, `[64, 128)`, `[128, 192)` and
/// `[192, 256)` with midpoints 31, 95, 159 and 223. Boundaries are
/// half-open on the low end: 64, 128 and 192 belong to the next bucket.
#[inline]
pub fn quadrant_midpoint(v: u8) -> u8 {
    if v < 64 {
        31
    } else if v < 128 {
        95
    } else if v < 192 {
        159
    } else {
        223
    }
}

/// Reject grids no filter can process.
pub(crate) fn ensure_nonempty(grid: &PixelGrid) -> Result<(), FilterError> {
    if grid.is_empty() {
        return Err(FilterError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(())
}

/// Apply `f` to every pixel of `input`, producing a fresh grid of the
/// same dimensions.
///
/// Output rows are partitioned across the rayon thread pool; each worker
/// writes a disjoint row range while reading the shared immutable input.
/// Callers must have rejected empty grids first.
pub(crate) fn map_pixels<F>(input: &PixelGrid, f: F) -> PixelGrid
where
    F: Fn(Rgb) -> Rgb + Sync,
{
    debug_assert!(!input.is_empty());

    let (width, height) = (input.width(), input.height());
    let mut output = PixelGrid::new(width, height);
    let row_len = width * 3;

    output
        .raw_mut()
        .par_chunks_mut(row_len)
        .zip(input.raw().par_chunks(row_len))
        .for_each(|(dst_row, src_row)| {
            for (dst, src) in dst_row.chunks_exact_mut(3).zip(src_row.chunks_exact(3)) {
                let px = f(Rgb::new(src[0], src[1], src[2]));
                dst[0] = px.r;
                dst[1] = px.g;
                dst[2] = px.b;
            }
        });

    output
}
