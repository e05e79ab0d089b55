//! Write operations for phantom headers

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::grid::GridSpec;
use crate::parsers::{DIMENSION, END_INPUT, VOXELSIZE};

/// Write a [GridSpec] as a minimal phantom header
///
/// Only the directives read by [read_header()](crate::read_header) are
/// written, so the output is not a complete simulation input. Values are
/// written with full precision and read back exactly.
///
/// ```text
/// VOXELSIZE mm 1 1 2
/// DIMENSION n 61 61 150
/// END-INPUT
/// ```
///
/// ```rust, no_run
/// # use dosekit_phantom::{write_header, GridSpec};
/// let grid = GridSpec::new([1.0, 1.0, 2.0], [61, 61, 150]).unwrap();
/// write_header(&grid, "./phantom.hed").unwrap();
/// ```
pub fn write_header<P: AsRef<Path>>(grid: &GridSpec, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{VOXELSIZE} mm {} {} {}", grid.vx, grid.vy, grid.vz)?;
    writeln!(writer, "{DIMENSION} n {} {} {}", grid.nx, grid.ny, grid.nz)?;
    writeln!(writer, "{END_INPUT}")?;
    writer.flush()?;
    Ok(())
}
