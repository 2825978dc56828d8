//! retouch-io - Raster buffer round-trip
//!
//! Minimal image I/O for the retouch library: binary PGM/PPM, enough to
//! get an 8-bit raster onto disk and back unchanged. The surrounding
//! application owns all other persistence.

mod error;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{read_pnm, write_pnm};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use retouch_core::Raster;

/// Read a PNM image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_pnm(BufReader::new(file))
}

/// Write a raster to a file path as binary PNM.
///
/// Grayscale rasters are written as PGM (P5), RGB rasters as PPM (P6).
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_pnm(raster, BufWriter::new(file))
}
