//! Command line arguments

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Parser, ValueEnum};

/// Dose profiles from voxelised phantom simulations
///
/// Reads the phantom header and sparse dose file, rebuilds the dose volume,
/// and writes X, Y, Z profiles and the XY plane around the chosen centre.
#[derive(Parser, Debug)]
#[command(name = "dosekit", version, about, long_about)]
pub struct Cli {
    /// JSON config file, any flag given here takes precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Phantom header file [default: Results/phantom.hed]
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Sparse dose file [default: Results/dose_z_6mm.out]
    #[arg(long, value_name = "PATH")]
    pub dose: Option<PathBuf>,

    /// Shift of the centre along x in mm [default: 0.0]
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub shift_x: Option<f64>,

    /// Shift of the centre along y in mm [default: 0.0]
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    pub shift_y: Option<f64>,

    /// Depth of the centre in mm [default: 6.0]
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    pub shift_z: Option<f64>,

    /// Multiplier for every profile value [default: 1e7]
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Offset added to voxel indices: none, nz, or an integer [default: none]
    #[arg(long)]
    pub offset: Option<String>,

    /// Fail if any voxel has no dose sample
    #[arg(long)]
    pub strict: bool,

    /// Output directory [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Also write the full volume as VTK
    #[arg(long)]
    pub vtk: bool,

    /// VTK file format [default: xml]
    #[arg(long, value_enum)]
    pub vtk_format: Option<VtkOutput>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// VTK formats available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VtkOutput {
    /// XML rectilinear grid (.vtr)
    Xml,
    /// Legacy ASCII (.vtk)
    Ascii,
    /// Legacy big endian binary (.vtk)
    Binary,
}

impl From<VtkOutput> for dosekit_dose::vtk::VtkFormat {
    fn from(format: VtkOutput) -> Self {
        match format {
            VtkOutput::Xml => Self::Xml,
            VtkOutput::Ascii => Self::LegacyAscii,
            VtkOutput::Binary => Self::LegacyBinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_shifts() {
        let cli = Cli::parse_from(["dosekit", "-y", "-3", "--shift-x=-1.5"]);
        assert_eq!(cli.shift_y, Some(-3.0));
        assert_eq!(cli.shift_x, Some(-1.5));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["dosekit", "-vv", "--vtk", "--vtk-format", "ascii"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.vtk);
        assert_eq!(cli.vtk_format, Some(VtkOutput::Ascii));
        assert!(Cli::try_parse_from(["dosekit", "-v", "-q"]).is_err());
    }
}
