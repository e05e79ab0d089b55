//! Physical coordinates of voxel centres along each axis

// external crates
use serde::{Deserialize, Serialize};

/// Cartesian axis of the phantom grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Lateral, centred on the beam axis
    X,
    /// Lateral, centred on the beam axis
    Y,
    /// Depth, starting at the phantom surface
    Z,
}

impl Axis {
    /// All three axes in (x, y, z) order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in (x, y, z) ordered arrays
    pub const fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lowercase name, handy for file names
    pub const fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Depth axis, voxel centres measured from the surface
///
/// `axis[k] = (k + 0.5) * v` for `k` in `[0, n)`.
///
/// ```rust
/// # use dosekit_phantom::z_axis;
/// assert_eq!(z_axis(3, 2.0), vec![1.0, 3.0, 5.0]);
/// ```
pub fn z_axis(n: usize, v: f64) -> Vec<f64> {
    axis_from(0.0, n, v)
}

/// Lateral axis, voxel centres about the middle of the grid
///
/// `axis[k] = -(n/2)*v + (k + 0.5) * v`, where `n/2` is integer division. An
/// odd count therefore puts the origin on the edge of the middle voxel rather
/// than its centre.
///
/// ```rust
/// # use dosekit_phantom::centred_axis;
/// assert_eq!(centred_axis(4, 2.0), vec![-3.0, -1.0, 1.0, 3.0]);
/// assert_eq!(centred_axis(3, 1.0), vec![-0.5, 0.5, 1.5]);
/// ```
pub fn centred_axis(n: usize, v: f64) -> Vec<f64> {
    axis_from(centred_start(n, v), n, v)
}

/// Lower edge of the first voxel on a centred axis
pub(crate) fn centred_start(n: usize, v: f64) -> f64 {
    -((n / 2) as f64) * v
}

fn axis_from(start: f64, n: usize, v: f64) -> Vec<f64> {
    (0..n).map(|k| start + (k as f64 + 0.5) * v).collect()
}
