//! Bilateral filtering (edge-preserving smoothing)
//!
//! The bilateral filter smooths uniform regions while preserving strong
//! edges. Every output pixel is a normalized weighted average of its
//! spatial neighborhood, where each neighbor's weight is the product of
//!
//! - a spatial weight from a precomputed Gaussian table
//!   ([`SpatialKernel`]), and
//! - a tonal weight, a Gaussian of the signed per-channel difference
//!   between the neighbor and the center pixel.
//!
//! The tonal weight is evaluated per channel, and the weighted sum is
//! normalized per channel as well: neighbors brighter than the center are
//! damped, darker ones boosted. Channels therefore mix independently, not
//! through a shared color-distance norm.
//!
//! Neighborhood sampling clamps coordinates to the image bounds, so border
//! pixels see their nearest edge row/column replicated.
//!
//! Rows are independent: each row task reads the shared input and kernel
//! and writes only its own output row, so rows are dispatched to the rayon
//! pool and joined before the call returns. The result is identical for
//! any worker count.
//!
//! # Example
//!
//! ```
//! use retouch_core::{Channels, Raster};
//! use retouch_filter::bilateral_filter;
//!
//! let raster = Raster::new(64, 64, Channels::Rgb).unwrap();
//! let smoothed = bilateral_filter(&raster, 2.0, 30.0).unwrap();
//! assert_eq!(smoothed.dimensions(), raster.dimensions());
//! ```

use std::f64::consts::PI;

use log::debug;
use rayon::prelude::*;
use retouch_core::{FRaster, Raster};

use crate::{FilterError, FilterResult, SpatialKernel};

/// Upper bound on samples per pixel, used to size stack accumulators.
const MAX_CHANNELS: usize = 3;

/// Apply the bilateral filter to an 8-bit raster.
///
/// The input is widened to double precision, filtered, and the result is
/// rounded and clipped back to 8-bit in a single pass after every row has
/// been produced. Width, height, and channel count are preserved.
///
/// # Arguments
/// * `image` - Input grayscale or RGB raster
/// * `sigma_s` - Spatial standard deviation (> 0; the interactive range
///   is `[1, 10]`)
/// * `sigma_b` - Tonal standard deviation (> 0; the interactive range is
///   `[1, 100]`)
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if either sigma is not a
/// positive finite number. Validation happens before any allocation or
/// row dispatch; a rejected call performs no partial work.
pub fn bilateral_filter(image: &Raster, sigma_s: f64, sigma_b: f64) -> FilterResult<Raster> {
    validate_sigmas(sigma_s, sigma_b)?;

    let input = FRaster::from_raster(image);
    let smoothed = bilateral_filter_float(&input, sigma_s, sigma_b)?;
    Ok(smoothed.to_raster())
}

/// Apply the bilateral filter to a floating-point raster.
///
/// This is the working-precision entry point used by [`bilateral_filter`];
/// it performs no rounding or clipping, so callers that chain filters can
/// stay in double precision.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if either sigma is not a
/// positive finite number.
pub fn bilateral_filter_float(
    input: &FRaster,
    sigma_s: f64,
    sigma_b: f64,
) -> FilterResult<FRaster> {
    validate_sigmas(sigma_s, sigma_b)?;

    let kernel = SpatialKernel::build(sigma_s)?;
    debug!(
        "bilateral: {}x{}, {} channel(s), kernel {}x{} (k={})",
        input.width(),
        input.height(),
        input.channels().count(),
        kernel.dim(),
        kernel.dim(),
        kernel.radius(),
    );

    let mut output = FRaster::new(input.width(), input.height(), input.channels())?;
    let stride = output.row_stride();
    output
        .data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, out_row)| filter_row(input, out_row, &kernel, y as u32, sigma_b));

    Ok(output)
}

/// Compute one output row.
///
/// Reads only the immutable input and kernel and writes only `out_row`,
/// so any number of rows may run concurrently.
fn filter_row(input: &FRaster, out_row: &mut [f64], kernel: &SpatialKernel, y: u32, sigma_b: f64) {
    let width = input.width() as i64;
    let height = input.height() as i64;
    let nch = input.channels().count();
    let k = kernel.radius() as i64;

    let tonal_scale = 1.0 / (2.0 * PI * sigma_b).sqrt();
    let inv_sigma_b2 = 1.0 / (sigma_b * sigma_b);

    for x in 0..width {
        let center = input.pixel_unchecked(x as u32, y);

        let mut weighted_sum = [0.0f64; MAX_CHANNELS];
        let mut weight_total = [0.0f64; MAX_CHANNELS];

        for di in -k..=k {
            // Clamp to image boundaries (replicate border)
            let sy = (y as i64 + di).clamp(0, height - 1) as u32;
            for dj in -k..=k {
                let sx = (x + dj).clamp(0, width - 1) as u32;

                let spatial = kernel.get(di, dj);
                let value = input.pixel_unchecked(sx, sy);

                for c in 0..nch {
                    let diff = value[c] - center[c];
                    let tonal = tonal_scale * (-0.5 * diff * inv_sigma_b2).exp();
                    let weight = spatial * tonal;
                    weighted_sum[c] += value[c] * weight;
                    weight_total[c] += weight;
                }
            }
        }

        // The center sample always contributes spatial(0,0) * tonal(0) > 0,
        // so every per-channel total is strictly positive.
        let base = x as usize * nch;
        for c in 0..nch {
            out_row[base + c] = weighted_sum[c] / weight_total[c];
        }
    }
}

fn validate_sigmas(sigma_s: f64, sigma_b: f64) -> FilterResult<()> {
    if !sigma_s.is_finite() || sigma_s <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "sigma_s must be positive".to_string(),
        ));
    }
    if !sigma_b.is_finite() || sigma_b <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "sigma_b must be positive".to_string(),
        ));
    }
    Ok(())
}
