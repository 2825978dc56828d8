//! Spatial-only convolution
//!
//! Plain convolution of a raster with a [`SpatialKernel`], using the same
//! replicated-border sampling as the bilateral filter but no tonal term.
//! This is the reference the bilateral filter converges to as the tonal
//! scale grows large.

use retouch_core::{FRaster, Raster};

use crate::{FilterResult, SpatialKernel};

/// Convolve a floating-point raster with a spatial kernel.
///
/// Uses replicate (clamp) border handling: samples outside the image
/// boundary take the value of the nearest edge pixel. Channels are
/// convolved independently.
///
/// If `normalize` is true, kernel weights are scaled to sum to 1.0 before
/// convolution; normalization is silently skipped when the weight sum is
/// near zero.
pub fn convolve(input: &FRaster, kernel: &SpatialKernel, normalize: bool) -> FilterResult<FRaster> {
    let width = input.width() as i64;
    let height = input.height() as i64;
    let nch = input.channels().count();
    let k = kernel.radius() as i64;

    let ksum = kernel.sum();
    let scale = if normalize && ksum.abs() >= 1e-12 {
        1.0 / ksum
    } else {
        1.0
    };

    let mut output = FRaster::new(input.width(), input.height(), input.channels())?;

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f64; 3];

            for di in -k..=k {
                let sy = (y + di).clamp(0, height - 1) as u32;
                for dj in -k..=k {
                    let sx = (x + dj).clamp(0, width - 1) as u32;
                    let weight = kernel.get(di, dj) * scale;
                    let value = input.pixel_unchecked(sx, sy);
                    for c in 0..nch {
                        sum[c] += value[c] * weight;
                    }
                }
            }

            for c in 0..nch {
                output.set_sample(x as u32, y as u32, c, sum[c]);
            }
        }
    }

    Ok(output)
}

/// Apply a normalized Gaussian blur to an 8-bit raster.
///
/// Builds the spatial table for `sigma` and convolves with it, rounding
/// and clipping back to 8-bit at the end.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidParameters`] if `sigma` is not a
/// positive finite number.
pub fn gaussian_blur(image: &Raster, sigma: f64) -> FilterResult<Raster> {
    let kernel = SpatialKernel::build(sigma)?;
    let input = FRaster::from_raster(image);
    let blurred = convolve(&input, &kernel, true)?;
    Ok(blurred.to_raster())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Channels;

    #[test]
    fn test_normalized_uniform_is_fixed_point() {
        let mut raster = Raster::new(5, 5, Channels::Gray).unwrap();
        raster.fill(&[100]);
        let input = FRaster::from_raster(&raster);

        let kernel = SpatialKernel::build(1.0).unwrap();
        let result = convolve(&input, &kernel, true).unwrap();

        for &s in result.data() {
            assert!((s - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_impulse_spreads() {
        let mut input = FRaster::new(7, 7, Channels::Gray).unwrap();
        input.set_sample(3, 3, 0, 255.0);

        let kernel = SpatialKernel::build(0.5).unwrap();
        let result = convolve(&input, &kernel, true).unwrap();

        // Mass moves from the impulse to its neighbors but is conserved
        // away from borders.
        assert!(result.sample(3, 3, 0) < 255.0);
        assert!(result.sample(3, 3, 0) > result.sample(2, 3, 0));
        assert!(result.sample(2, 3, 0) > 0.0);
    }

    #[test]
    fn test_gaussian_blur_shape() {
        let mut raster = Raster::new(10, 6, Channels::Rgb).unwrap();
        for y in 0..6 {
            for x in 0..10 {
                raster.set_pixel(x, y, &[(x * 25) as u8, (y * 40) as u8, 128]).unwrap();
            }
        }

        let blurred = gaussian_blur(&raster, 1.0).unwrap();
        assert_eq!(blurred.dimensions(), raster.dimensions());
        assert_eq!(blurred.channels(), raster.channels());
    }

    #[test]
    fn test_gaussian_blur_invalid_sigma() {
        let raster = Raster::new(5, 5, Channels::Gray).unwrap();
        assert!(gaussian_blur(&raster, 0.0).is_err());
        assert!(gaussian_blur(&raster, -2.0).is_err());
    }

    #[test]
    fn test_blur_softens_edge() {
        let mut raster = Raster::new(12, 6, Channels::Gray).unwrap();
        for y in 0..6 {
            for x in 0..12 {
                let v = if x < 6 { 0 } else { 240 };
                raster.set_pixel(x, y, &[v]).unwrap();
            }
        }

        let blurred = gaussian_blur(&raster, 1.0).unwrap();
        // Pixels adjacent to the step move toward the other side.
        assert!(blurred.sample(5, 3, 0) > 0);
        assert!(blurred.sample(6, 3, 0) < 240);
    }
}
