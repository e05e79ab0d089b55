//! Write operations for dose samples, profiles, and figures

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::figure::Figure;
use crate::profile::{Plane, Profile};
use crate::sparse::SparseDose;

// external crates
use log::debug;

/// Write samples in the same layout as the simulation output
///
/// One `<index>     <dose>` line per sample, sorted by index.
///
/// ```rust, no_run
/// # use dosekit_dose::{write_dose, SparseDose};
/// let dose: SparseDose = [(0, 0.5), (7, 0.25)].into_iter().collect();
/// write_dose(&dose, "dose.out").unwrap();
/// ```
pub fn write_dose<P: AsRef<Path>>(dose: &SparseDose, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (index, value) in dose.sorted() {
        writeln!(writer, "{index}     {value:e}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a profile as `coordinate,dose` CSV
pub fn write_profile_csv<P: AsRef<Path>>(profile: &Profile, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} profile to {}", profile.axis, path.display());

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["coordinate", "dose"])?;
    for (coordinate, dose) in profile.points() {
        writer.write_record([coordinate.to_string(), dose.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a plane as `x,y,dose` CSV
pub fn write_plane_csv<P: AsRef<Path>>(plane: &Plane, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} plane points to {}", plane.len(), path.display());

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y", "dose"])?;
    for (x, y, dose) in plane.points() {
        writer.write_record([x.to_string(), y.to_string(), dose.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write figures to a pretty JSON array
pub fn write_figures_json<P: AsRef<Path>>(figures: &[Figure], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, figures)?;
    writer.flush()?;
    Ok(())
}
