//! Conversion of sparse samples into a dense volume

// standard library
use std::str::FromStr;

// crate modules
use crate::error::{Error, Result};
use crate::sparse::SparseDose;
use crate::volume::DenseVolume;

// dosekit modules
use dosekit_phantom::GridSpec;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Constant added to the linear voxel index before looking up a sample
///
/// The dose file written by the simulation does not always start numbering
/// at the first voxel. Some outputs have been seen shifted by the number of
/// depth voxels, so the offset is left for the user to choose.
///
/// | Variant    | Offset          | Text form       |
/// | ---------- | --------------- | --------------- |
/// | `None`     | 0               | `none` or `0`   |
/// | `Depth`    | `nz`            | `nz` or `depth` |
/// | `Fixed(n)` | `n`             | any integer     |
///
/// ```rust
/// # use dosekit_dose::IndexOffset;
/// # use dosekit_phantom::GridSpec;
/// let grid = GridSpec::new([1.0, 1.0, 1.0], [4, 4, 6]).unwrap();
///
/// assert_eq!("none".parse::<IndexOffset>().unwrap().value(&grid), 0);
/// assert_eq!("nz".parse::<IndexOffset>().unwrap().value(&grid), 6);
/// assert_eq!("12".parse::<IndexOffset>().unwrap().value(&grid), 12);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndexOffset {
    /// Sample indices are exactly the linear voxel index
    #[default]
    None,
    /// Sample indices are shifted by the number of voxels in z
    Depth,
    /// Sample indices are shifted by a fixed amount
    Fixed(usize),
}

impl IndexOffset {
    /// Resolve the offset for a particular grid
    pub fn value(&self, grid: &GridSpec) -> usize {
        match self {
            Self::None => 0,
            Self::Depth => grid.nz,
            Self::Fixed(n) => *n,
        }
    }
}

impl FromStr for IndexOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "0" => Ok(Self::None),
            "nz" | "depth" => Ok(Self::Depth),
            other => other
                .parse::<usize>()
                .map(Self::Fixed)
                .map_err(|_| Error::InvalidOffset(s.to_string())),
        }
    }
}

impl TryFrom<String> for IndexOffset {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<IndexOffset> for String {
    fn from(offset: IndexOffset) -> Self {
        offset.to_string()
    }
}

impl std::fmt::Display for IndexOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Depth => write!(f, "nz"),
            Self::Fixed(n) => write!(f, "{n}"),
        }
    }
}

/// What to do when a voxel has no sample
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingIndexPolicy {
    /// The voxel received no dose
    #[default]
    Zero,
    /// Every voxel must have a sample, anything missing is an error
    Strict,
}

/// Options for [reconstruct()]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructOptions {
    /// Constant added to each linear index before lookup
    pub offset: IndexOffset,
    /// Behaviour for voxels without a sample
    pub policy: MissingIndexPolicy,
}

/// Build the dense volume for `grid` from sparse samples
///
/// Every voxel `(ix, iy, iz)` takes the sample at
///
/// ```text
/// idx = ix + iy*nx + iz*nx*ny + offset
/// ```
///
/// Voxels without a sample are zero under [MissingIndexPolicy::Zero], or fail
/// with [Error::MissingIndex] under [MissingIndexPolicy::Strict]. Samples that
/// no voxel refers to are ignored.
///
/// ```rust
/// # use dosekit_dose::{reconstruct, ReconstructOptions, SparseDose};
/// # use dosekit_phantom::GridSpec;
/// let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap();
/// let dose: SparseDose = [(0, 0.5), (7, 0.25)].into_iter().collect();
///
/// let volume = reconstruct(&grid, &dose, ReconstructOptions::default()).unwrap();
/// assert_eq!(volume[[0, 0, 0]], 0.5);
/// assert_eq!(volume[[1, 1, 1]], 0.25);
/// assert_eq!(volume.total(), 0.75);
/// ```
pub fn reconstruct(
    grid: &GridSpec,
    dose: &SparseDose,
    options: ReconstructOptions,
) -> Result<DenseVolume> {
    grid.validate()?;
    let offset = options.offset.value(grid);
    debug!(
        "Reconstructing {}x{}x{} volume (offset {offset}, {:?} policy)",
        grid.nx, grid.ny, grid.nz, options.policy
    );

    let mut values = vec![0.0; grid.number_of_voxels()];
    let mut missing = 0;

    for iz in 0..grid.nz {
        for iy in 0..grid.ny {
            for ix in 0..grid.nx {
                let position = grid.linear_index(ix, iy, iz);
                // an overflowing lookup can only be missing
                let index = position.checked_add(offset);
                let sample = index.and_then(|i| dose.get(i));

                values[position] = match (sample, options.policy) {
                    (Some(value), _) => value,
                    (None, MissingIndexPolicy::Zero) => {
                        missing += 1;
                        0.0
                    }
                    (None, MissingIndexPolicy::Strict) => {
                        return Err(Error::MissingIndex {
                            index: index.unwrap_or(usize::MAX),
                            voxel: [ix, iy, iz],
                        })
                    }
                };
            }
        }
    }

    let unused = dose
        .iter()
        .filter(|(index, _)| *index < offset || *index - offset >= values.len())
        .count();

    if unused > 0 {
        debug!(
            "{unused} sample(s) fall outside the grid with index offset \"{}\"",
            options.offset
        );
    }
    debug!("{missing} voxel(s) without a sample set to 0.0");

    DenseVolume::from_values(*grid, values)
}
