//! Read operations for phantom header files

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::grid::GridSpec;
use crate::parsers;

// dosekit modules
use dosekit_utils::f;

// external crates
use log::{debug, trace};

/// Read the voxel grid from a phantom header file
///
/// Returns a [GridSpec] built from the `VOXELSIZE` and `DIMENSION` directives
/// found before `END-INPUT`.
///
/// ```rust, no_run
/// # use dosekit_phantom::read_header;
/// let grid = read_header("Results/phantom.hed").unwrap();
/// println!("{grid}");
/// ```
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<GridSpec> {
    let path = path.as_ref();
    debug!("Reading phantom header {}", path.display());
    parse_header(init_reader(path)?)
}

/// Parse a phantom header from any buffered source
///
/// Lines are split on whitespace with empty tokens discarded. Unrecognised
/// lines are skipped, and the scan stops at `END-INPUT`. A later directive
/// overwrites an earlier one.
///
/// Errors for:
/// - a recognised directive with fewer than five tokens
/// - a value that is not a number (or not an unsigned integer for counts)
/// - either directive missing entirely
/// - a grid with zero counts or non-positive voxel sizes
///
/// ```rust
/// # use dosekit_phantom::{parse_header, GridSpec};
/// let text = "VOXELSIZE x y 1.0 1.0 1.0\nDIMENSION x y 2 2 2\n";
/// let grid = parse_header(text.as_bytes()).unwrap();
/// assert_eq!(grid, GridSpec::new([1.0, 1.0, 1.0], [2, 2, 2]).unwrap());
/// ```
pub fn parse_header<R: BufRead>(reader: R) -> Result<GridSpec> {
    let mut voxel_size: Option<[f64; 3]> = None;
    let mut counts: Option<[usize; 3]> = None;

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens = parsers::tokens(&line);

        match tokens.first().copied() {
            Some(parsers::VOXELSIZE) => {
                voxel_size = Some(directive(n + 1, &line, &tokens, parsers::float)?);
                trace!("line {}: voxel size {:?}", n + 1, voxel_size);
            }
            Some(parsers::DIMENSION) => {
                counts = Some(directive(n + 1, &line, &tokens, parsers::count)?);
                trace!("line {}: dimensions {:?}", n + 1, counts);
            }
            Some(parsers::END_INPUT) => {
                trace!("line {}: end of input", n + 1);
                break;
            }
            _ => continue,
        }
    }

    let voxel_size = voxel_size.ok_or(Error::MissingDirective(parsers::VOXELSIZE))?;
    let counts = counts.ok_or(Error::MissingDirective(parsers::DIMENSION))?;
    GridSpec::new(voxel_size, counts)
}

/// Extract the three values of a directive line with the parser provided
fn directive<T, F>(line_number: usize, line: &str, tokens: &[&str], parser: F) -> Result<[T; 3]>
where
    T: Copy + Default,
    F: Fn(&str) -> nom::IResult<&str, T>,
{
    let malformed = |reason: String| Error::MalformedLine {
        line: line_number,
        content: line.trim_end().to_string(),
        reason,
    };

    let values = parsers::directive_values(tokens).ok_or_else(|| {
        malformed(f!(
            "expected at least 5 tokens, found {}",
            tokens.len()
        ))
    })?;

    let mut result = [T::default(); 3];
    for (slot, token) in result.iter_mut().zip(values) {
        let (_, value) =
            parser(token).map_err(|_| malformed(f!("could not interpret \"{token}\"")))?;
        *slot = value;
    }
    Ok(result)
}

/// Initialise a reader, keeping the path for a missing file
fn init_reader(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::FileNotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}
