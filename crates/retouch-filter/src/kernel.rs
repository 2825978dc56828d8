//! Spatial convolution kernels
//!
//! A [`SpatialKernel`] is a square table of Gaussian weights indexed by the
//! geometric offset `(di, dj)` from its center cell. It depends only on the
//! spatial scale, never on pixel values, and is built once per filter call
//! and shared read-only across all rows.

use std::f64::consts::PI;

use crate::{FilterError, FilterResult};

/// Square 2D Gaussian weight table with odd side length `2k + 1`
///
/// The side length is derived from the spatial scale:
/// `dim = floor(2π·σs)`, incremented by one when even. For very small σs
/// this degenerates to a 1x1 table (`k = 0`).
#[derive(Debug, Clone)]
pub struct SpatialKernel {
    /// Side length of the table (odd)
    dim: usize,
    /// Center offset, `(dim - 1) / 2`
    radius: usize,
    /// Weights in row-major order
    weights: Vec<f64>,
}

impl SpatialKernel {
    /// Build the spatial Gaussian table for scale `sigma_s`.
    ///
    /// Every entry is `exp(-0.5·(i² + j²)/σs²) / (2π·σs²)` for offsets
    /// `i, j ∈ [-k, k]`. The `1/(2π·σs²)` factor only scales the table;
    /// the shape is what matters because bilateral weights are
    /// renormalized per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sigma_s` is not a
    /// positive finite number.
    pub fn build(sigma_s: f64) -> FilterResult<Self> {
        if !sigma_s.is_finite() || sigma_s <= 0.0 {
            return Err(FilterError::InvalidParameters(
                "sigma_s must be positive".to_string(),
            ));
        }

        let mut dim = (2.0 * PI * sigma_s).floor() as usize;
        if dim % 2 == 0 {
            dim += 1;
        }
        let radius = (dim - 1) / 2;

        let scale = 1.0 / (2.0 * PI * sigma_s * sigma_s);
        let inv_sigma2 = 1.0 / (sigma_s * sigma_s);

        let mut weights = vec![0.0f64; dim * dim];
        for i in 0..dim {
            let di = i as f64 - radius as f64;
            for j in 0..dim {
                let dj = j as f64 - radius as f64;
                weights[i * dim + j] = scale * (-0.5 * (di * di + dj * dj) * inv_sigma2).exp();
            }
        }

        Ok(SpatialKernel {
            dim,
            radius,
            weights,
        })
    }

    /// Get the side length of the table.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get the center offset `k`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Get the weight for offset `(di, dj)` from the center.
    ///
    /// # Panics
    ///
    /// Panics if `|di| > k` or `|dj| > k`.
    #[inline]
    pub fn get(&self, di: i64, dj: i64) -> f64 {
        let i = (di + self.radius as i64) as usize;
        let j = (dj + self.radius as i64) as usize;
        self.weights[i * self.dim + j]
    }

    /// Get the kernel weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.weights
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
