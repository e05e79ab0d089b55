//! The full pipeline from input files to written outputs

// standard library
use std::path::PathBuf;

// crate modules
use crate::config::Config;
use crate::error::Result;

// dosekit modules
use dosekit_dose::vtk::{write_vtk, VolumeToVtk};
use dosekit_dose::{
    profile, profile_figure, reconstruct, write_figures_json, write_plane_csv,
    write_profile_csv, xy_plane, xy_scatter_figure, Center, DoseReader,
};
use dosekit_phantom::{read_header, Axis};
use dosekit_utils::{f, ValueExt};

// external crates
use log::{debug, info, warn};

/// Settings for a run that are not part of the saved configuration
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Show the line counter while reading the dose file
    pub progress: bool,
}

/// Read, rebuild, slice, and write everything described by `config`
///
/// Returns the paths of every file written.
pub fn run(config: &Config, options: &RunOptions) -> Result<Vec<PathBuf>> {
    let grid = read_header(&config.header_path)?;
    info!("{grid}");

    let mut reader = DoseReader::new();
    if options.progress {
        reader.enable_progress();
    }
    let dose = reader.read(&config.dose_path)?;
    info!(
        "Read {} dose samples, total {}",
        dose.len(),
        dose.total().sci(5, 2)
    );

    let volume = reconstruct(&grid, &dose, config.reconstruct_options())?;
    info!("{volume}");
    match (volume.minimum(), volume.maximum()) {
        (Ok(minimum), Ok((maximum, voxel))) => info!(
            "Dose range {} to {}, maximum in voxel {voxel:?}",
            minimum.sci(5, 2),
            maximum.sci(5, 2)
        ),
        (Err(e), _) | (_, Err(e)) => warn!("No dose range for this volume: {e}"),
    }

    let center = Center::from_shift(&grid, config.shift())?;
    info!("Profile centre at voxel {:?}", center.indices());

    std::fs::create_dir_all(&config.output)?;
    let mut written = Vec::new();
    let mut figures = Vec::new();

    for axis in Axis::ALL {
        let line = profile(&volume, &center, axis, config.scale_constant)?;
        let path = config.output.join(f!("{}_profile.csv", axis.name()));
        write_profile_csv(&line, &path)?;
        figures.push(profile_figure(&line));
        written.push(path);
    }

    let plane = xy_plane(&volume, &center, config.scale_constant)?;
    let path = config.output.join("xy_plane.csv");
    write_plane_csv(&plane, &path)?;
    figures.push(xy_scatter_figure(&plane));
    written.push(path);

    let path = config.output.join("figures.json");
    write_figures_json(&figures, &path)?;
    written.push(path);

    if config.vtk {
        let vtk = VolumeToVtk::new().convert(&volume);
        let path = config
            .output
            .join(f!("dose.{}", config.vtk_format.extension()));
        write_vtk(vtk, &path, config.vtk_format)?;
        written.push(path);
    }

    for path in &written {
        debug!("Wrote {}", path.display());
    }
    Ok(written)
}
