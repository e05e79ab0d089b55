//! Sparse dose samples keyed by linear voxel index

// standard library
use std::collections::HashMap;

// external crates
use serde::{Deserialize, Serialize};

/// Dose recorded for each scored voxel
///
/// The simulation only writes voxels that received a deposit, so most phantom
/// voxels are usually absent. An absent index means no dose was scored.
///
/// Inserting an index that already exists replaces the previous value, which
/// matches reading a file where the last line for an index wins.
///
/// ```rust
/// # use dosekit_dose::SparseDose;
/// let mut dose = SparseDose::new();
/// dose.insert(0, 0.5);
/// dose.insert(7, 0.25);
/// dose.insert(7, 0.75);
///
/// assert_eq!(dose.len(), 2);
/// assert_eq!(dose.get(7), Some(0.75));
/// assert_eq!(dose.get(3), None);
/// assert_eq!(dose.total(), 1.25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseDose {
    samples: HashMap<usize, f64>,
}

impl SparseDose {
    /// Empty set of samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dose for an index, returning any value it replaced
    pub fn insert(&mut self, index: usize, dose: f64) -> Option<f64> {
        self.samples.insert(index, dose)
    }

    /// Dose recorded for an index, if any
    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(&index).copied()
    }

    /// Number of distinct indices recorded
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum of every recorded dose
    ///
    /// Equivalent to the total dose reported at the end of a simulation run.
    pub fn total(&self) -> f64 {
        self.samples.values().sum()
    }

    /// Index and value of the largest recorded dose
    ///
    /// Ties go to the lowest index so the answer does not depend on hash order.
    pub fn maximum(&self) -> Option<(usize, f64)> {
        self.samples
            .iter()
            .map(|(i, d)| (*i, *d))
            .reduce(|best, next| match next.1.total_cmp(&best.1) {
                std::cmp::Ordering::Greater => next,
                std::cmp::Ordering::Equal if next.0 < best.0 => next,
                _ => best,
            })
    }

    /// Iterate over `(index, dose)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples.iter().map(|(i, d)| (*i, *d))
    }

    /// All `(index, dose)` pairs sorted by index
    pub fn sorted(&self) -> Vec<(usize, f64)> {
        let mut pairs: Vec<(usize, f64)> = self.iter().collect();
        pairs.sort_by_key(|(i, _)| *i);
        pairs
    }
}

impl FromIterator<(usize, f64)> for SparseDose {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<usize, f64>> for SparseDose {
    fn from(samples: HashMap<usize, f64>) -> Self {
        Self { samples }
    }
}
