//! Dense 3D dose volume

// standard library
use std::ops::Index;

// crate modules
use crate::error::{Error, Result};

// dosekit modules
use dosekit_phantom::GridSpec;
use dosekit_utils::{SliceExt, ValueExt};

/// Dose for every voxel of the phantom
///
/// Values are stored flat with `x` varying fastest, so the flat position of
/// voxel `(ix, iy, iz)` is the grid's
/// [linear_index()](GridSpec::linear_index). Once built the volume is never
/// modified.
///
/// Voxels are indexed with `[ix, iy, iz]`, and out of range indices panic in
/// the same way as slices. Use [get()](DenseVolume::get) for a checked
/// lookup.
///
/// ```rust
/// # use dosekit_dose::DenseVolume;
/// # use dosekit_phantom::GridSpec;
/// let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 1, 1]).unwrap();
/// let volume = DenseVolume::from_values(grid, vec![0.1, 0.2]).unwrap();
///
/// assert_eq!(volume[[1, 0, 0]], 0.2);
/// assert_eq!(volume.get(2, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVolume {
    grid: GridSpec,
    values: Vec<f64>,
}

impl DenseVolume {
    /// Volume of zeros with the shape of `grid`
    pub fn zeros(grid: GridSpec) -> Self {
        Self {
            grid,
            values: vec![0.0; grid.number_of_voxels()],
        }
    }

    /// Wrap flat values, which must have one entry per voxel
    pub fn from_values(grid: GridSpec, values: Vec<f64>) -> Result<Self> {
        if values.len() != grid.number_of_voxels() {
            return Err(Error::ShapeMismatch {
                expected: grid.number_of_voxels(),
                found: values.len(),
            });
        }
        Ok(Self { grid, values })
    }

    /// Grid the volume was built on
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Shape as `[nx, ny, nz]`
    pub fn shape(&self) -> [usize; 3] {
        self.grid.shape()
    }

    /// Flat values, `x` varying fastest
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Checked lookup of voxel `(ix, iy, iz)`
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> Option<f64> {
        let [nx, ny, nz] = self.shape();
        if ix < nx && iy < ny && iz < nz {
            Some(self.values[self.grid.linear_index(ix, iy, iz)])
        } else {
            None
        }
    }

    /// Sum of the dose in every voxel
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Number of voxels with any dose
    pub fn non_zero(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }

    /// Largest dose and the voxel it is in
    ///
    /// Fails if any value is NaN or infinite.
    ///
    /// ```rust
    /// # use dosekit_dose::DenseVolume;
    /// # use dosekit_phantom::GridSpec;
    /// let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 1]).unwrap();
    /// let volume = DenseVolume::from_values(grid, vec![0.1, 0.2, 0.9, 0.3]).unwrap();
    /// assert_eq!(volume.maximum().unwrap(), (0.9, [0, 1, 0]));
    /// ```
    pub fn maximum(&self) -> Result<(f64, [usize; 3])> {
        let (position, value) = self.values.try_max_position()?;
        // position always comes from within the values
        let voxel = self.grid.voxel_indices(position).unwrap_or_default();
        Ok((value, voxel))
    }

    /// Smallest dose in any voxel
    pub fn minimum(&self) -> Result<f64> {
        Ok(self.values.try_min()?)
    }
}

impl Index<[usize; 3]> for DenseVolume {
    type Output = f64;

    fn index(&self, [ix, iy, iz]: [usize; 3]) -> &f64 {
        let [nx, ny, nz] = self.shape();
        assert!(
            ix < nx && iy < ny && iz < nz,
            "voxel ({ix}, {iy}, {iz}) out of range for {nx}x{ny}x{nz} volume"
        );
        &self.values[self.grid.linear_index(ix, iy, iz)]
    }
}

impl std::fmt::Display for DenseVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [nx, ny, nz] = self.shape();
        writeln!(f, "DenseVolume {{")?;
        writeln!(f, "    shape: {nx}x{ny}x{nz}")?;
        writeln!(f, "    non-zero voxels: {}", self.non_zero())?;
        write!(f, "    total: {}\n}}", self.total().sci(5, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap()
    }

    #[test]
    fn zeros_has_every_voxel() {
        let volume = DenseVolume::zeros(grid());
        assert_eq!(volume.values().len(), 8);
        assert_eq!(volume.total(), 0.0);
        assert_eq!(volume.non_zero(), 0);
    }

    #[test]
    fn flat_order_is_x_fastest() {
        let values = (0..8).map(f64::from).collect();
        let volume = DenseVolume::from_values(grid(), values).unwrap();
        assert_eq!(volume[[1, 0, 0]], 1.0);
        assert_eq!(volume[[0, 1, 0]], 2.0);
        assert_eq!(volume[[0, 0, 1]], 4.0);
        assert_eq!(volume.get(1, 1, 1), Some(7.0));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            DenseVolume::from_values(grid(), vec![0.0; 7]),
            Err(Error::ShapeMismatch {
                expected: 8,
                found: 7
            })
        ));
    }

    #[test]
    fn nan_has_no_maximum() {
        let mut values = vec![0.0; 8];
        values[3] = f64::NAN;
        let volume = DenseVolume::from_values(grid(), values).unwrap();
        assert!(matches!(volume.maximum(), Err(Error::ValueError(_))));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let volume = DenseVolume::zeros(grid());
        let _ = volume[[2, 0, 0]];
    }
}
