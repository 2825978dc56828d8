//! retouch-test - Regression test support
//!
//! Provides the [`RegParams`] comparison ledger used by the `tests/*_reg.rs`
//! suites, plus deterministic constructors for the small synthetic images
//! the suites run on. No image assets are shipped; every test input is
//! built in memory.
//!
//! # Usage
//!
//! ```
//! use retouch_test::{RegParams, uniform_raster};
//! use retouch_core::Channels;
//!
//! let mut rp = RegParams::new("example");
//! let raster = uniform_raster(5, 5, Channels::Gray, &[100]).unwrap();
//! rp.compare_values(100.0, raster.sample(2, 2, 0) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use retouch_core::{Channels, Raster, Result};

/// Build a raster with every pixel set to `samples`.
pub fn uniform_raster(width: u32, height: u32, channels: Channels, samples: &[u8]) -> Result<Raster> {
    let mut raster = Raster::new(width, height, channels)?;
    raster.fill(samples);
    Ok(raster)
}

/// Build a raster of `background` with a single `value` pixel at (x, y).
pub fn impulse_raster(
    width: u32,
    height: u32,
    channels: Channels,
    background: u8,
    x: u32,
    y: u32,
    value: u8,
) -> Result<Raster> {
    let nch = channels.count();
    let mut raster = uniform_raster(width, height, channels, &vec![background; nch])?;
    raster.set_pixel(x, y, &vec![value; nch])?;
    Ok(raster)
}

/// Build a raster with a vertical step edge: columns left of the midpoint
/// get `left`, the rest get `right`.
pub fn edge_raster(width: u32, height: u32, channels: Channels, left: u8, right: u8) -> Result<Raster> {
    let nch = channels.count();
    let mut raster = Raster::new(width, height, channels)?;
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { left } else { right };
            raster.set_pixel(x, y, &vec![v; nch])?;
        }
    }
    Ok(raster)
}

/// Build a raster with a deterministic diagonal gradient pattern.
pub fn gradient_raster(width: u32, height: u32, channels: Channels) -> Result<Raster> {
    let nch = channels.count();
    let mut raster = Raster::new(width, height, channels)?;
    for y in 0..height {
        for x in 0..width {
            let mut samples = Vec::with_capacity(nch);
            for c in 0..nch {
                samples.push((7 * x as usize + 13 * y as usize + 31 * c) as u8);
            }
            raster.set_pixel(x, y, &samples)?;
        }
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_raster() {
        let raster = uniform_raster(4, 4, Channels::Rgb, &[1, 2, 3]).unwrap();
        assert_eq!(raster.pixel(3, 3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_impulse_raster() {
        let raster = impulse_raster(5, 5, Channels::Gray, 0, 2, 2, 255).unwrap();
        assert_eq!(raster.sample(2, 2, 0), 255);
        assert_eq!(raster.sample(1, 2, 0), 0);
    }

    #[test]
    fn test_edge_raster() {
        let raster = edge_raster(10, 4, Channels::Gray, 50, 200).unwrap();
        assert_eq!(raster.sample(4, 0, 0), 50);
        assert_eq!(raster.sample(5, 0, 0), 200);
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let a = gradient_raster(6, 6, Channels::Rgb).unwrap();
        let b = gradient_raster(6, 6, Channels::Rgb).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_regparams_failure_tracking() {
        let mut rp = RegParams::new("selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(!rp.cleanup());
    }
}
