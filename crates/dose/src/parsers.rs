//! Library of parser functions for dose sample lines

// nom parser combinators
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// A whole token as a signed linear voxel index
///
/// Negative values are valid integers but can never match a voxel, so the
/// reader decides what to do with them.
pub(crate) fn index(i: &str) -> IResult<&str, i64> {
    all_consuming(complete::i64)(i)
}

/// A whole token as a dose value
pub(crate) fn dose(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

/// Leading `<index> <dose>` pair of a data line
///
/// Returns `None` for lines with fewer than two tokens, which are skipped by
/// the reader. Any tokens after the dose are ignored.
pub(crate) fn sample_tokens(i: &str) -> Option<(&str, &str)> {
    let mut tokens = i.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(index), Some(dose)) => Some((index, dose)),
        _ => None,
    }
}
