//! Conversion of dense dose volumes to VTK formats
//!
//! Volumes map directly onto a rectilinear grid, with the voxel edges taken
//! from the phantom axes and the dose stored as a cell scalar named `dose`.
//!
//! ```rust, no_run
//! # use dosekit_dose::vtk::{write_vtk, VolumeToVtk, VtkFormat};
//! # use dosekit_dose::DenseVolume;
//! # use dosekit_phantom::GridSpec;
//! # let volume = DenseVolume::zeros(GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap());
//! let vtk = VolumeToVtk::new().convert(&volume);
//! write_vtk(vtk, "dose.vtr", VtkFormat::Xml).unwrap();
//! ```

mod builder;
mod convert;

// standard library
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::volume::DenseVolume;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};
use vtkio::Vtk;

#[doc(inline)]
pub use builder::VolumeToVtkBuilder;

#[doc(inline)]
pub use convert::VolumeToVtk;

/// Supported VTK output formats
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VtkFormat {
    /// XML rectilinear grid, `.vtr`
    #[default]
    Xml,
    /// Legacy text format, `.vtk`
    LegacyAscii,
    /// Legacy binary format, `.vtk`
    LegacyBinary,
}

impl VtkFormat {
    /// Conventional file extension for the format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Xml => "vtr",
            Self::LegacyAscii | Self::LegacyBinary => "vtk",
        }
    }
}

/// Convert a volume to a [Vtk] with the default converter
pub fn volume_to_vtk(volume: &DenseVolume) -> Vtk {
    VolumeToVtk::new().convert(volume)
}

/// Write a [Vtk] to `path` in the chosen format
///
/// The XML format is picked by vtkio from the file extension, so XML output
/// should be written to a `.vtr` path.
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {format:?} VTK to {}", path.display());

    match format {
        VtkFormat::Xml => vtk.export(path)?,
        VtkFormat::LegacyAscii => vtk.export_ascii(path)?,
        VtkFormat::LegacyBinary => vtk.export_be(path)?,
    }
    Ok(())
}
