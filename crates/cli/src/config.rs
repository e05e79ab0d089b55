//! Run configuration, from defaults, a JSON file, and command line flags

// standard library
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

// crate modules
use crate::cli::Cli;
use crate::error::{Error, Result};

// dosekit modules
use dosekit_dose::vtk::VtkFormat;
use dosekit_dose::{IndexOffset, MissingIndexPolicy, ReconstructOptions};

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything needed for a run
///
/// Missing fields in a config file take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Phantom header file
    pub header_path: PathBuf,
    /// Sparse dose file
    pub dose_path: PathBuf,
    /// Shift of the profile centre along x (mm)
    pub shift_x: f64,
    /// Shift of the profile centre along y (mm)
    pub shift_y: f64,
    /// Depth of the profile centre (mm)
    pub shift_z: f64,
    /// Multiplier applied to every profile value
    pub scale_constant: f64,
    /// Constant added to linear indices before lookup
    pub offset: IndexOffset,
    /// Fail on voxels with no dose sample
    pub strict: bool,
    /// Directory for all outputs
    pub output: PathBuf,
    /// Also write the full volume to VTK
    pub vtk: bool,
    /// Format of the VTK volume, `xml`, `legacy_ascii` or `legacy_binary`
    pub vtk_format: VtkFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_path: PathBuf::from("Results/phantom.hed"),
            dose_path: PathBuf::from("Results/dose_z_6mm.out"),
            shift_x: 0.0,
            shift_y: 0.0,
            shift_z: 6.0,
            scale_constant: 1.0e7,
            offset: IndexOffset::None,
            strict: false,
            output: PathBuf::from("."),
            vtk: false,
            vtk_format: VtkFormat::Xml,
        }
    }
}

impl Config {
    /// Read a JSON config file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading config from {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Build the final configuration for the command line
    ///
    /// Starts from the config file if one was given, otherwise the defaults,
    /// then overrides anything set explicitly with a flag.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_json(path)?,
            None => Self::default(),
        };
        config.apply(cli)?;
        Ok(config)
    }

    /// Override fields with any flags that were given
    pub fn apply(&mut self, cli: &Cli) -> Result<()> {
        if let Some(path) = &cli.header {
            self.header_path.clone_from(path);
        }
        if let Some(path) = &cli.dose {
            self.dose_path.clone_from(path);
        }
        if let Some(x) = cli.shift_x {
            self.shift_x = x;
        }
        if let Some(y) = cli.shift_y {
            self.shift_y = y;
        }
        if let Some(z) = cli.shift_z {
            self.shift_z = z;
        }
        if let Some(scale) = cli.scale {
            self.scale_constant = scale;
        }
        if let Some(offset) = &cli.offset {
            self.offset = offset.parse()?;
        }
        if let Some(path) = &cli.output {
            self.output.clone_from(path);
        }
        if let Some(format) = cli.vtk_format {
            self.vtk_format = format.into();
        }
        self.strict |= cli.strict;
        self.vtk |= cli.vtk;
        Ok(())
    }

    /// Shift of the profile centre as `[x, y, z]`
    pub fn shift(&self) -> [f64; 3] {
        [self.shift_x, self.shift_y, self.shift_z]
    }

    /// Options for rebuilding the dense volume
    pub fn reconstruct_options(&self) -> ReconstructOptions {
        ReconstructOptions {
            offset: self.offset,
            policy: match self.strict {
                true => MissingIndexPolicy::Strict,
                false => MissingIndexPolicy::Zero,
            },
        }
    }
}
