use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Display the contained value, or "none"
    ///
    /// ```rust
    /// # use dosekit_utils::OptionExt;
    /// let offset: Option<usize> = Some(4);
    /// assert_eq!(offset.display(), "4");
    ///
    /// let offset: Option<usize> = None;
    /// assert_eq!(offset.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
