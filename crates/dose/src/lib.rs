//! Sparse dose files, dense dose volumes, and dose profiles
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod figure;
mod parsers;
mod profile;
mod reader;
mod reconstruct;
mod sparse;
mod volume;
mod writer;

pub mod vtk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use reader::{read_dose, DoseReader};

#[doc(inline)]
pub use sparse::SparseDose;

#[doc(inline)]
pub use volume::DenseVolume;

#[doc(inline)]
pub use reconstruct::{reconstruct, IndexOffset, MissingIndexPolicy, ReconstructOptions};

#[doc(inline)]
pub use profile::{profile, x_profile, xy_plane, y_profile, z_profile, Center, Plane, Profile};

#[doc(inline)]
pub use figure::{profile_figure, xy_scatter_figure, Figure, Series, PROFILE_SUPTITLE};

#[doc(inline)]
pub use writer::{write_dose, write_figures_json, write_plane_csv, write_profile_csv};

#[doc(inline)]
pub use vtk::{volume_to_vtk, write_vtk};

#[doc(inline)]
pub use error::{Error, Result};
