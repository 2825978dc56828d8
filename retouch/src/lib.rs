//! Retouch - Edge-preserving photo retouching filters
//!
//! Retouch provides the numeric core of an interactive photo editor: an
//! edge-preserving bilateral smoothing filter with a plain Gaussian blur
//! alongside it, over simple 8-bit raster containers.
//!
//! # Overview
//!
//! - [`Raster`] / [`FRaster`] - 8-bit and floating-point image containers
//! - [`filter::bilateral_filter`] - edge-preserving smoothing
//! - [`filter::gaussian_blur`] - spatial-only smoothing
//! - [`io`] - PNM round-trip for raster buffers
//!
//! # Example
//!
//! ```
//! use retouch::{Channels, Raster};
//! use retouch::filter::bilateral_filter;
//!
//! let raster = Raster::new(64, 48, Channels::Rgb).unwrap();
//! let smoothed = bilateral_filter(&raster, 3.0, 40.0).unwrap();
//! assert_eq!(smoothed.dimensions(), raster.dimensions());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use retouch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use retouch_filter as filter;
pub use retouch_io as io;
