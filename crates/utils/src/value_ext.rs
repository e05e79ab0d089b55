use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific formatting with a signed, zero padded exponent
    ///
    /// Rust prints `1e0` for `{:e}`, which makes columns of dose values hard to
    /// read. This always gives the mantissa `precision` decimal places and
    /// pads the exponent to `exp_pad` digits.
    ///
    /// ```rust
    /// # use dosekit_utils::ValueExt;
    /// assert_eq!((2.5e-7).sci(3, 2), "2.500e-07".to_string());
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0e12).sci(1, 3), "1.0e+012".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", &self, precision = precision);
        match formatted.rsplit_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // NaN and inf have no exponent to pad
            None => formatted,
        }
    }
}
