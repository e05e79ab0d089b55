//! Module for reading voxelised phantom header files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod axis;
mod error;
mod grid;
mod parsers;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use axis::{centred_axis, z_axis, Axis};

#[doc(inline)]
pub use grid::GridSpec;

#[doc(inline)]
pub use reader::{parse_header, read_header};

#[doc(inline)]
pub use writer::write_header;

#[doc(inline)]
pub use error::{Error, Result};
