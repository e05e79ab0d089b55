// crate modules
use crate::axis::{centred_axis, centred_start, z_axis, Axis};
use crate::error::{Error, Result};

// dosekit modules
use dosekit_utils::{f, ValueExt};

// external crates
use serde::{Deserialize, Serialize};

/// Voxel grid of the phantom, as described by the header file
///
/// Six values define everything about the geometry: the size of a voxel
/// along each axis, and the number of voxels along each axis.
///
/// ```text
/// VOXELSIZE <skip> <vx> <vy> <vz>
/// DIMENSION <skip> <nx> <ny> <nz>
/// ```
///
/// Voxels are numbered with `x` varying fastest, so the linear index of voxel
/// `(ix, iy, iz)` is `ix + iy*nx + iz*nx*ny`. This is the same ordering used
/// by the dense dose volume.
///
/// A [GridSpec] made through [GridSpec::new()] or the header reader is
/// guaranteed to have positive voxel sizes and non-zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Voxel size in x (mm)
    pub vx: f64,
    /// Voxel size in y (mm)
    pub vy: f64,
    /// Voxel size in z (mm)
    pub vz: f64,
    /// Number of voxels in x
    pub nx: usize,
    /// Number of voxels in y
    pub ny: usize,
    /// Number of voxels in z
    pub nz: usize,
}

impl GridSpec {
    /// Create a validated grid
    ///
    /// ```rust
    /// # use dosekit_phantom::GridSpec;
    /// let grid = GridSpec::new([1.0, 1.0, 2.0], [4, 4, 10]).unwrap();
    /// assert_eq!(grid.number_of_voxels(), 160);
    ///
    /// // Zero counts and non-positive sizes are rejected
    /// assert!(GridSpec::new([1.0, 1.0, 2.0], [4, 0, 10]).is_err());
    /// assert!(GridSpec::new([1.0, -1.0, 2.0], [4, 4, 10]).is_err());
    /// ```
    pub fn new(voxel_size: [f64; 3], counts: [usize; 3]) -> Result<Self> {
        let grid = Self {
            vx: voxel_size[0],
            vy: voxel_size[1],
            vz: voxel_size[2],
            nx: counts[0],
            ny: counts[1],
            nz: counts[2],
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check the invariants of a grid built by hand
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let v = self.voxel_size(axis);
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::InvalidGrid(f!("{axis} voxel size is {v}")));
            }
            if self.count(axis) == 0 {
                return Err(Error::InvalidGrid(f!("{axis} has no voxels")));
            }
        }
        Ok(())
    }

    /// Number of voxels along an axis
    pub const fn count(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Voxel size along an axis
    pub const fn voxel_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.vx,
            Axis::Y => self.vy,
            Axis::Z => self.vz,
        }
    }

    /// Voxel counts as `[nx, ny, nz]`
    pub const fn shape(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Total number of voxels in the phantom
    pub const fn number_of_voxels(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Volume of a single voxel (mm^3)
    pub fn voxel_volume(&self) -> f64 {
        self.vx * self.vy * self.vz
    }

    /// Full width of the phantom along an axis (mm)
    pub fn extent(&self, axis: Axis) -> f64 {
        self.count(axis) as f64 * self.voxel_size(axis)
    }

    /// Coordinates of every voxel centre along an axis
    ///
    /// Lateral axes are centred with [centred_axis()], depth uses
    /// [z_axis()].
    ///
    /// ```rust
    /// # use dosekit_phantom::{Axis, GridSpec};
    /// let grid = GridSpec::new([2.0, 2.0, 2.0], [4, 4, 3]).unwrap();
    /// assert_eq!(grid.axis_coordinates(Axis::X), vec![-3.0, -1.0, 1.0, 3.0]);
    /// assert_eq!(grid.axis_coordinates(Axis::Z), vec![1.0, 3.0, 5.0]);
    /// ```
    pub fn axis_coordinates(&self, axis: Axis) -> Vec<f64> {
        let (n, v) = (self.count(axis), self.voxel_size(axis));
        match axis {
            Axis::X | Axis::Y => centred_axis(n, v),
            Axis::Z => z_axis(n, v),
        }
    }

    /// Voxel edges along an axis, one more than the number of voxels
    ///
    /// ```rust
    /// # use dosekit_phantom::{Axis, GridSpec};
    /// let grid = GridSpec::new([2.0, 2.0, 2.0], [4, 4, 3]).unwrap();
    /// assert_eq!(grid.axis_bounds(Axis::Y), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    /// assert_eq!(grid.axis_bounds(Axis::Z), vec![0.0, 2.0, 4.0, 6.0]);
    /// ```
    pub fn axis_bounds(&self, axis: Axis) -> Vec<f64> {
        let (n, v) = (self.count(axis), self.voxel_size(axis));
        let start = match axis {
            Axis::X | Axis::Y => centred_start(n, v),
            Axis::Z => 0.0,
        };
        (0..=n).map(|k| start + k as f64 * v).collect()
    }

    /// Linear index of voxel `(ix, iy, iz)`, `x` varying fastest
    ///
    /// ```rust
    /// # use dosekit_phantom::GridSpec;
    /// let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap();
    /// assert_eq!(grid.linear_index(1, 1, 1), 7);
    /// assert_eq!(grid.linear_index(1, 0, 1), 5);
    /// ```
    pub const fn linear_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + iy * self.nx + iz * self.nx * self.ny
    }

    /// Find the `(ix, iy, iz)` indices for a given linear index
    ///
    /// The reverse of [linear_index()](GridSpec::linear_index). Returns `None`
    /// if the index is beyond the last voxel.
    pub const fn voxel_indices(&self, idx: usize) -> Option<[usize; 3]> {
        if idx >= self.number_of_voxels() {
            return None;
        }
        let plane = self.nx * self.ny;
        let iz = idx / plane;
        let iy = (idx - iz * plane) / self.nx;
        let ix = idx - iz * plane - iy * self.nx;
        Some([ix, iy, iz])
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Phantom {{")?;
        writeln!(
            f,
            "    voxels: {} ({}x{}x{})",
            self.number_of_voxels(),
            self.nx,
            self.ny,
            self.nz
        )?;
        writeln!(
            f,
            "    voxel size: {} x {} x {} mm",
            self.vx, self.vy, self.vz
        )?;
        writeln!(f, "    voxel volume: {} mm^3", self.voxel_volume().sci(5, 2))?;
        write!(
            f,
            "    extent: {} x {} x {} mm\n}}",
            self.extent(Axis::X),
            self.extent(Axis::Y),
            self.extent(Axis::Z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec::new([1.0, 2.0, 3.0], [3, 4, 5]).unwrap()
    }

    #[test]
    fn derived_values() {
        let g = grid();
        assert_eq!(g.shape(), [3, 4, 5]);
        assert_eq!(g.number_of_voxels(), 60);
        assert_eq!(g.voxel_volume(), 6.0);
        assert_eq!(g.extent(Axis::Y), 8.0);
        assert_eq!(g.extent(Axis::Z), 15.0);
    }

    #[test]
    fn index_round_trip() {
        let g = grid();
        for iz in 0..g.nz {
            for iy in 0..g.ny {
                for ix in 0..g.nx {
                    let idx = g.linear_index(ix, iy, iz);
                    assert_eq!(g.voxel_indices(idx), Some([ix, iy, iz]));
                }
            }
        }
        assert_eq!(g.voxel_indices(60), None);
    }

    #[test]
    fn bounds_contain_centres() {
        let g = grid();
        for axis in Axis::ALL {
            let bounds = g.axis_bounds(axis);
            let centres = g.axis_coordinates(axis);
            assert_eq!(bounds.len(), centres.len() + 1);
            for (k, c) in centres.iter().enumerate() {
                assert!(bounds[k] < *c && *c < bounds[k + 1]);
            }
        }
    }

    #[test]
    fn invalid_grids() {
        assert!(matches!(
            GridSpec::new([0.0, 1.0, 1.0], [1, 1, 1]),
            Err(Error::InvalidGrid(_))
        ));
        assert!(matches!(
            GridSpec::new([1.0, 1.0, f64::NAN], [1, 1, 1]),
            Err(Error::InvalidGrid(_))
        ));
        assert!(matches!(
            GridSpec::new([1.0, 1.0, 1.0], [1, 1, 0]),
            Err(Error::InvalidGrid(_))
        ));
    }
}
