//! Library of parser functions for header lines

// nom parser combinators
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// Voxel dimensions directive
pub(crate) const VOXELSIZE: &str = "VOXELSIZE";

/// Voxel counts directive
pub(crate) const DIMENSION: &str = "DIMENSION";

/// Anything after this line is not read
pub(crate) const END_INPUT: &str = "END-INPUT";

/// Whitespace separated tokens, empty tokens discarded
pub(crate) fn tokens(i: &str) -> Vec<&str> {
    i.split_whitespace().collect()
}

/// The three values of a directive, skipping the keyword and placeholder
///
/// ```text
/// VOXELSIZE <skip> <vx> <vy> <vz>
/// ```
///
/// Anything beyond the fifth token is ignored.
pub(crate) fn directive_values<'a>(tokens: &[&'a str]) -> Option<[&'a str; 3]> {
    match tokens.get(2..5) {
        Some(&[a, b, c]) => Some([a, b, c]),
        _ => None,
    }
}

/// A whole token as a floating point value
pub(crate) fn float(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

/// A whole token as an unsigned count
pub(crate) fn count(i: &str) -> IResult<&str, usize> {
    let (i, value) = all_consuming(complete::u64)(i)?;
    Ok((i, value as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_tokens() {
        let t = tokens("  VOXELSIZE   x y\t1.0 2.0 3.0  extra ");
        assert_eq!(t[0], VOXELSIZE);
        assert_eq!(directive_values(&t), Some(["1.0", "2.0", "3.0"]));
    }

    #[test]
    fn short_directive() {
        let t = tokens("DIMENSION x 2 2");
        assert_eq!(directive_values(&t), None);
    }

    #[test]
    fn numeric_tokens() {
        assert_eq!(float("2.5").unwrap().1, 2.5);
        assert_eq!(float("1e-3").unwrap().1, 0.001);
        assert_eq!(count("61").unwrap().1, 61);
        assert!(float("1.0mm").is_err());
        assert!(count("2.0").is_err());
        assert!(count("-2").is_err());
    }
}
