//! FRaster - Floating-point working image
//!
//! `FRaster` mirrors the layout of [`Raster`] with `f64` samples. Filters
//! convert the 8-bit input once on entry, accumulate in double precision,
//! and convert back once after the whole image is produced, so no
//! intermediate result is ever truncated to integer range.
//!
//! # Memory layout
//!
//! Row-major with interleaved channels, no padding: the sample at
//! `(x, y, c)` is at index `(y * width + x) * channels + c`.

use crate::error::{Error, Result};
use crate::raster::{Channels, Raster};

/// Floating-point raster image
#[derive(Debug, Clone, PartialEq)]
pub struct FRaster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Sample data (row-major, interleaved channels, no padding)
    data: Vec<f64>,
}

impl FRaster {
    /// Create a new FRaster with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * channels.count();
        Ok(FRaster {
            width,
            height,
            channels,
            data: vec![0.0f64; size],
        })
    }

    /// Create an FRaster from raw sample data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * channels.count();
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels.count(),
                expected
            )));
        }

        Ok(FRaster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Widen an 8-bit raster into floating point.
    ///
    /// Every sample is converted exactly; no scaling is applied.
    pub fn from_raster(raster: &Raster) -> Self {
        FRaster {
            width: raster.width(),
            height: raster.height(),
            channels: raster.channels(),
            data: raster.data().iter().map(|&s| s as f64).collect(),
        }
    }

    /// Convert back to an 8-bit raster.
    ///
    /// Samples are rounded to nearest and clipped to `[0, 255]`. This is
    /// the single conversion step performed after an entire filtered image
    /// has been produced.
    pub fn to_raster(&self) -> Raster {
        let data = self
            .data
            .iter()
            .map(|&s| (s + 0.5).clamp(0.0, 255.0) as u8)
            .collect();
        // Layouts match, so the length check cannot fail.
        Raster::from_samples(self.width, self.height, self.channels, data).unwrap()
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples in one row (`width * channels`).
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels.count()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable raw access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the samples of one pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[f64] {
        let nch = self.channels.count();
        let base = (y as usize * self.width as usize + x as usize) * nch;
        &self.data[base..base + nch]
    }

    /// Get a single sample value.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> f64 {
        self.pixel_unchecked(x, y)[channel]
    }

    /// Set a single sample value.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of bounds.
    #[inline]
    pub fn set_sample(&mut self, x: u32, y: u32, channel: usize, value: f64) {
        let nch = self.channels.count();
        let base = (y as usize * self.width as usize + x as usize) * nch;
        self.data[base + channel] = value;
    }

    /// Minimum and maximum sample values over the whole image.
    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &s in &self.data {
            min = min.min(s);
            max = max.max(s);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let fraster = FRaster::new(10, 5, Channels::Gray).unwrap();
        assert_eq!(fraster.dimensions(), (10, 5));
        assert!(fraster.data().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_new_invalid_dimension() {
        assert!(FRaster::new(0, 5, Channels::Gray).is_err());
        assert!(FRaster::new(10, 0, Channels::Rgb).is_err());
    }

    #[test]
    fn test_from_data_length_check() {
        assert!(FRaster::from_data(2, 2, Channels::Gray, vec![0.0; 4]).is_ok());
        assert!(FRaster::from_data(2, 2, Channels::Gray, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_raster_round_trip() {
        let mut raster = Raster::new(3, 2, Channels::Rgb).unwrap();
        raster.set_pixel(1, 0, &[0, 128, 255]).unwrap();
        raster.set_pixel(2, 1, &[42, 43, 44]).unwrap();

        let fraster = FRaster::from_raster(&raster);
        assert_eq!(fraster.sample(1, 0, 2), 255.0);

        let back = fraster.to_raster();
        assert_eq!(back, raster);
    }

    #[test]
    fn test_to_raster_clips_and_rounds() {
        let data = vec![-12.0, 0.4, 0.5, 254.4, 254.6, 300.0];
        let fraster = FRaster::from_data(6, 1, Channels::Gray, data).unwrap();
        let raster = fraster.to_raster();
        assert_eq!(raster.data(), &[0, 0, 1, 254, 255, 255]);
    }

    #[test]
    fn test_sample_set_sample() {
        let mut fraster = FRaster::new(4, 4, Channels::Rgb).unwrap();
        fraster.set_sample(3, 2, 1, 99.5);
        assert_eq!(fraster.sample(3, 2, 1), 99.5);
        assert_eq!(fraster.sample(3, 2, 0), 0.0);
    }

    #[test]
    fn test_min_max() {
        let data = vec![5.0, -1.0, 7.5, 2.0];
        let fraster = FRaster::from_data(4, 1, Channels::Gray, data).unwrap();
        assert_eq!(fraster.min_max(), (-1.0, 7.5));
    }
}
