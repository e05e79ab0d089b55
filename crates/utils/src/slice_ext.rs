use crate::error::{Error, Result};

/// Extends functionality for slices of float values
pub trait SliceExt {
    /// Position and value of the largest element
    ///
    /// Ties keep the first occurrence. Any NAN or infinite value, or an empty
    /// slice, is an error rather than a silently wrong answer.
    ///
    /// ```rust
    /// # use dosekit_utils::{Error, SliceExt};
    /// assert_eq!([0.1, 0.7, 0.3, 0.7].try_max_position(), Ok((1, 0.7)));
    /// assert_eq!(Vec::<f64>::new().try_max_position(), Err(Error::SliceContainsNoValues));
    /// assert_eq!(
    ///     [1.0, f64::NAN].try_max_position(),
    ///     Err(Error::SliceContainsUndefinedValues)
    /// );
    /// ```
    fn try_max_position(&self) -> Result<(usize, f64)>;

    /// Largest element
    ///
    /// ```rust
    /// # use dosekit_utils::SliceExt;
    /// assert_eq!([2.0, -1.0, 4.5].try_max(), Ok(4.5));
    /// ```
    fn try_max(&self) -> Result<f64> {
        self.try_max_position().map(|(_, value)| value)
    }

    /// Smallest element
    ///
    /// ```rust
    /// # use dosekit_utils::SliceExt;
    /// assert_eq!([2.0, -1.0, 4.5].try_min(), Ok(-1.0));
    /// ```
    fn try_min(&self) -> Result<f64>;
}

impl SliceExt for [f64] {
    fn try_max_position(&self) -> Result<(usize, f64)> {
        ensure_finite(self)?;
        let mut best = (0, self[0]);
        for (i, value) in self.iter().enumerate().skip(1) {
            if value.total_cmp(&best.1).is_gt() {
                best = (i, *value);
            }
        }
        Ok(best)
    }

    fn try_min(&self) -> Result<f64> {
        ensure_finite(self)?;
        Ok(self
            .iter()
            .copied()
            .fold(f64::INFINITY, |acc, value| acc.min(value)))
    }
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        Err(Error::SliceContainsNoValues)
    } else if values.iter().any(|v| !v.is_finite()) {
        Err(Error::SliceContainsUndefinedValues)
    } else {
        Ok(())
    }
}
