//! retouch-filter - Edge-preserving smoothing
//!
//! This crate provides the filtering operations of the retouch library:
//!
//! - Bilateral filtering (edge-preserving smoothing), the core operation
//! - Spatial Gaussian kernel construction
//! - Plain spatial convolution and Gaussian blur
//!
//! Filtering is a pure function of image and parameters: no state
//! persists between calls. Row processing is data-parallel and
//! deterministic regardless of worker count.

pub mod bilateral;
pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::SpatialKernel;

// Re-export commonly used functions
pub use bilateral::{bilateral_filter, bilateral_filter_float};
pub use convolve::{convolve, gaussian_blur};
