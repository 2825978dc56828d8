//! Retouch Core - Raster containers for image filtering
//!
//! This crate provides the data structures shared by the retouch
//! filtering crates:
//!
//! - [`Raster`] - 8-bit image, interleaved samples, 1 (gray) or 3 (RGB)
//!   channels
//! - [`FRaster`] - floating-point working image used for filter
//!   accumulation
//! - [`Channels`] - samples-per-pixel layout
//!
//! Both containers are plain row-major arrays: rows are contiguous and
//! unpadded, which lets filters hand out disjoint per-row slices for
//! parallel processing.

pub mod error;
pub mod fraster;
pub mod raster;

pub use error::{Error, Result};
pub use fraster::FRaster;
pub use raster::{Channels, Raster};
