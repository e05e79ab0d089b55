//! Dose profiles and planes through a dense volume
//!
//! Every profile is taken around a [Center] voxel and averages the four voxels
//! surrounding the line in the two fixed axes. For example, the Z profile at
//! depth index `k` is
//!
//! ```text
//! C * (v[ix,iy,k] + v[ix+1,iy,k] + v[ix,iy+1,k] + v[ix+1,iy+1,k]) / 4
//! ```
//!
//! where `C` is a scale constant used to bring the dose to convenient units.

// crate modules
use crate::error::{Error, Result};
use crate::volume::DenseVolume;

// dosekit modules
use dosekit_phantom::{Axis, GridSpec};

// external crates
use log::debug;
use serde::Serialize;

/// Voxel at the centre of the extracted profiles
///
/// The profiles average each voxel with its `+1` neighbours, so a valid
/// centre satisfies `i + 1 < n` on every axis. Both constructors check this
/// against the grid and fail with [Error::CenterOutOfRange] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Center {
    ix: usize,
    iy: usize,
    iz: usize,
}

impl Center {
    /// Centre from explicit voxel indices
    ///
    /// ```rust
    /// # use dosekit_dose::Center;
    /// # use dosekit_phantom::GridSpec;
    /// let grid = GridSpec::new([1.0, 1.0, 1.0], [4, 4, 4]).unwrap();
    /// assert!(Center::new(&grid, [2, 2, 2]).is_ok());
    /// assert!(Center::new(&grid, [3, 2, 2]).is_err());
    /// ```
    pub fn new(grid: &GridSpec, indices: [usize; 3]) -> Result<Self> {
        for axis in Axis::ALL {
            let index = indices[axis.index()];
            let count = grid.count(axis);
            if index >= count.saturating_sub(1) {
                return Err(Error::CenterOutOfRange {
                    axis,
                    index: i64::try_from(index).unwrap_or(i64::MAX),
                    count,
                });
            }
        }

        Ok(Self {
            ix: indices[0],
            iy: indices[1],
            iz: indices[2],
        })
    }

    /// Centre from a physical shift away from the middle of the grid (mm)
    ///
    /// Per axis the index is `n/2 - 1 + round(shift/v)`, with integer
    /// division and halves rounded to even.
    ///
    /// ```rust
    /// # use dosekit_dose::Center;
    /// # use dosekit_phantom::GridSpec;
    /// let grid = GridSpec::new([1.0, 1.0, 2.0], [10, 10, 20]).unwrap();
    /// let center = Center::from_shift(&grid, [0.0, 0.0, 6.0]).unwrap();
    /// assert_eq!(center.indices(), [4, 4, 12]);
    ///
    /// // Far outside the phantom
    /// assert!(Center::from_shift(&grid, [100.0, 0.0, 0.0]).is_err());
    /// ```
    pub fn from_shift(grid: &GridSpec, shift: [f64; 3]) -> Result<Self> {
        let mut indices = [0; 3];
        for axis in Axis::ALL {
            let count = grid.count(axis);
            let steps = (shift[axis.index()] / grid.voxel_size(axis)).round_ties_even();
            let index = (count / 2) as f64 - 1.0 + steps;

            // also catches NaN and anything too large for an integer index
            if !(index >= 0.0 && index + 1.0 < count as f64) {
                return Err(Error::CenterOutOfRange {
                    axis,
                    index: index as i64,
                    count,
                });
            }
            indices[axis.index()] = index as usize;
        }

        debug!("Centre voxel for shift {shift:?} is {indices:?}");
        Self::new(grid, indices)
    }

    /// Voxel indices as `[ix, iy, iz]`
    pub const fn indices(&self) -> [usize; 3] {
        [self.ix, self.iy, self.iz]
    }
}

/// A 1D line of dose values along one axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Axis the profile runs along
    pub axis: Axis,
    /// Voxel centre coordinates along the axis (mm)
    pub coordinates: Vec<f64>,
    /// Scaled dose at each coordinate
    pub values: Vec<f64>,
}

impl Profile {
    /// Iterate over `(coordinate, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coordinates
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// The XY plane at the centre depth as three parallel sequences
///
/// Points are ordered with `iy` outer and `ix` inner, ready for a 3D
/// scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plane {
    /// X coordinate of each point (mm)
    pub x: Vec<f64>,
    /// Y coordinate of each point (mm)
    pub y: Vec<f64>,
    /// Scaled dose of each point
    pub dose: Vec<f64>,
}

impl Plane {
    /// Number of points in the plane
    pub fn len(&self) -> usize {
        self.dose.len()
    }

    /// True if the plane has no points
    pub fn is_empty(&self) -> bool {
        self.dose.is_empty()
    }

    /// Iterate over `(x, y, dose)` triples
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.dose)
            .map(|((x, y), d)| (*x, *y, *d))
    }
}

/// Profile along `axis` through `center`, scaled by `scale`
///
/// The centre is checked against the volume's grid, since a [Center] made for
/// a different grid may not fit.
///
/// ```rust
/// # use dosekit_dose::{profile, Center, DenseVolume};
/// # use dosekit_phantom::{Axis, GridSpec};
/// let grid = GridSpec::new([1.0, 1.0, 1.0], [2, 2, 3]).unwrap();
/// let values = (0..12).map(|i| if i >= 8 { 4.0 } else { 0.0 }).collect();
/// let volume = DenseVolume::from_values(grid, values).unwrap();
/// let center = Center::new(&grid, [0, 0, 1]).unwrap();
///
/// let z = profile(&volume, &center, Axis::Z, 10.0).unwrap();
/// assert_eq!(z.coordinates, vec![0.5, 1.5, 2.5]);
/// assert_eq!(z.values, vec![0.0, 0.0, 40.0]);
/// ```
pub fn profile(volume: &DenseVolume, center: &Center, axis: Axis, scale: f64) -> Result<Profile> {
    let grid = volume.grid();
    let [ix, iy, iz] = Center::new(grid, center.indices())?.indices();

    let values = match axis {
        Axis::X => (0..grid.nx)
            .map(|i| {
                average4(
                    volume[[i, iy, iz]],
                    volume[[i, iy, iz + 1]],
                    volume[[i, iy + 1, iz]],
                    volume[[i, iy + 1, iz + 1]],
                    scale,
                )
            })
            .collect(),
        Axis::Y => (0..grid.ny)
            .map(|j| {
                average4(
                    volume[[ix, j, iz]],
                    volume[[ix, j, iz + 1]],
                    volume[[ix + 1, j, iz]],
                    volume[[ix + 1, j, iz + 1]],
                    scale,
                )
            })
            .collect(),
        Axis::Z => (0..grid.nz)
            .map(|k| {
                average4(
                    volume[[ix, iy, k]],
                    volume[[ix + 1, iy, k]],
                    volume[[ix, iy + 1, k]],
                    volume[[ix + 1, iy + 1, k]],
                    scale,
                )
            })
            .collect(),
    };

    Ok(Profile {
        axis,
        coordinates: grid.axis_coordinates(axis),
        values,
    })
}

/// Profile along X, see [profile()]
pub fn x_profile(volume: &DenseVolume, center: &Center, scale: f64) -> Result<Profile> {
    profile(volume, center, Axis::X, scale)
}

/// Profile along Y, see [profile()]
pub fn y_profile(volume: &DenseVolume, center: &Center, scale: f64) -> Result<Profile> {
    profile(volume, center, Axis::Y, scale)
}

/// Profile along Z, see [profile()]
pub fn z_profile(volume: &DenseVolume, center: &Center, scale: f64) -> Result<Profile> {
    profile(volume, center, Axis::Z, scale)
}

/// XY plane at the centre depth, averaging `iz` and `iz + 1`
///
/// ```rust
/// # use dosekit_dose::{xy_plane, Center, DenseVolume};
/// # use dosekit_phantom::GridSpec;
/// let grid = GridSpec::new([2.0, 2.0, 1.0], [2, 2, 2]).unwrap();
/// let values = vec![1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 0.0];
/// let volume = DenseVolume::from_values(grid, values).unwrap();
/// let center = Center::new(&grid, [0, 0, 0]).unwrap();
///
/// let plane = xy_plane(&volume, &center, 1.0).unwrap();
/// assert_eq!(plane.x, vec![-1.0, 1.0, -1.0, 1.0]);
/// assert_eq!(plane.y, vec![-1.0, -1.0, 1.0, 1.0]);
/// assert_eq!(plane.dose, vec![2.0, 2.0, 2.0, 2.0]);
/// ```
pub fn xy_plane(volume: &DenseVolume, center: &Center, scale: f64) -> Result<Plane> {
    let grid = volume.grid();
    let [_, _, iz] = Center::new(grid, center.indices())?.indices();

    let x_axis = grid.axis_coordinates(Axis::X);
    let y_axis = grid.axis_coordinates(Axis::Y);

    let capacity = grid.nx * grid.ny;
    let mut plane = Plane {
        x: Vec::with_capacity(capacity),
        y: Vec::with_capacity(capacity),
        dose: Vec::with_capacity(capacity),
    };

    for (iy, y) in y_axis.iter().enumerate() {
        for (ix, x) in x_axis.iter().enumerate() {
            plane.x.push(*x);
            plane.y.push(*y);
            plane
                .dose
                .push(scale * (volume[[ix, iy, iz]] + volume[[ix, iy, iz + 1]]) / 2.0);
        }
    }

    Ok(plane)
}

#[inline]
fn average4(a: f64, b: f64, c: f64, d: f64, scale: f64) -> f64 {
    scale * (a + b + c + d) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec::new([1.0, 1.0, 1.0], [4, 4, 4]).unwrap()
    }

    /// Volume where the dose in each voxel is `ix + 10*iy + 100*iz`
    fn ramp() -> DenseVolume {
        let g = grid();
        let mut values = vec![0.0; g.number_of_voxels()];
        for iz in 0..4 {
            for iy in 0..4 {
                for ix in 0..4 {
                    values[g.linear_index(ix, iy, iz)] = (ix + 10 * iy + 100 * iz) as f64;
                }
            }
        }
        DenseVolume::from_values(g, values).unwrap()
    }

    #[test]
    fn zero_volume_gives_zero_profiles() {
        let volume = DenseVolume::zeros(grid());
        let center = Center::new(&grid(), [1, 2, 0]).unwrap();
        for axis in Axis::ALL {
            let p = profile(&volume, &center, axis, 1.0e7).unwrap();
            assert_eq!(p.values.len(), 4);
            assert!(p.values.iter().all(|v| *v == 0.0));
        }
        let plane = xy_plane(&volume, &center, 1.0e7).unwrap();
        assert!(plane.dose.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn profiles_average_neighbours() {
        let volume = ramp();
        let center = Center::new(&grid(), [1, 1, 1]).unwrap();

        // fixed iy,iz in {1,2} average to 15 + 150
        let x = x_profile(&volume, &center, 1.0).unwrap();
        assert_eq!(x.values, vec![165.0, 166.0, 167.0, 168.0]);
        assert_eq!(x.coordinates, vec![-1.5, -0.5, 0.5, 1.5]);

        let y = y_profile(&volume, &center, 1.0).unwrap();
        assert_eq!(y.values, vec![151.5, 161.5, 171.5, 181.5]);

        let z = z_profile(&volume, &center, 2.0).unwrap();
        assert_eq!(z.values, vec![33.0, 233.0, 433.0, 633.0]);
        assert_eq!(z.coordinates, vec![0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn plane_is_row_major() {
        let volume = ramp();
        let center = Center::new(&grid(), [0, 0, 2]).unwrap();
        let plane = xy_plane(&volume, &center, 1.0).unwrap();

        assert_eq!(plane.len(), 16);
        // second point is ix=1, iy=0
        assert_eq!(plane.points().nth(1), Some((-0.5, -1.5, 251.0)));
        // fifth point starts the next row, ix=0, iy=1
        assert_eq!(plane.points().nth(4), Some((-1.5, -0.5, 260.0)));
    }

    #[test]
    fn center_on_last_voxel_is_rejected() {
        match Center::new(&grid(), [0, 3, 0]) {
            Err(Error::CenterOutOfRange { axis, index, count }) => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(index, 3);
                assert_eq!(count, 4);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn center_from_shift_rounds_half_to_even() {
        let g = GridSpec::new([2.0, 2.0, 2.0], [10, 10, 10]).unwrap();
        // 1.0/2.0 = 0.5 rounds to 0, 3.0/2.0 = 1.5 rounds to 2
        let center = Center::from_shift(&g, [1.0, 3.0, -2.0]).unwrap();
        assert_eq!(center.indices(), [4, 6, 3]);
    }

    #[test]
    fn negative_center_is_rejected() {
        let g = GridSpec::new([1.0, 1.0, 1.0], [4, 4, 4]).unwrap();
        assert!(matches!(
            Center::from_shift(&g, [0.0, -5.0, 0.0]),
            Err(Error::CenterOutOfRange {
                axis: Axis::Y,
                index: -4,
                ..
            })
        ));
    }

    #[test]
    fn huge_shift_is_rejected() {
        let g = GridSpec::new([1.0, 1.0, 1.0], [10, 10, 10]).unwrap();
        assert!(matches!(
            Center::from_shift(&g, [1.0e30, 0.0, 0.0]),
            Err(Error::CenterOutOfRange { axis: Axis::X, .. })
        ));
        assert!(matches!(
            Center::from_shift(&g, [0.0, -1.0e30, 0.0]),
            Err(Error::CenterOutOfRange { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn non_finite_shift_is_rejected() {
        let g = GridSpec::new([1.0, 1.0, 1.0], [10, 10, 10]).unwrap();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Center::from_shift(&g, [0.0, 0.0, bad]),
                Err(Error::CenterOutOfRange { axis: Axis::Z, .. })
            ));
        }
    }

    #[test]
    fn huge_indices_are_rejected() {
        match Center::new(&grid(), [usize::MAX, 0, 0]) {
            Err(Error::CenterOutOfRange { axis, index, count }) => {
                assert_eq!(axis, Axis::X);
                assert_eq!(index, i64::MAX);
                assert_eq!(count, 4);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn single_voxel_axis_has_no_centre() {
        let g = GridSpec::new([1.0, 1.0, 1.0], [4, 1, 4]).unwrap();
        assert!(Center::new(&g, [1, 0, 1]).is_err());
    }

    #[test]
    fn center_checked_against_volume_grid() {
        let big = GridSpec::new([1.0, 1.0, 1.0], [8, 8, 8]).unwrap();
        let center = Center::new(&big, [5, 5, 5]).unwrap();
        assert!(profile(&ramp(), &center, Axis::X, 1.0).is_err());
    }
}
