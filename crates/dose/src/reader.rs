//! Read operations for sparse dose sample files
//!
//! The simulation writes one line per scored voxel:
//!
//! ```text
//! <linear index>     <dose>
//! ```
//!
//! Lines are split on whitespace. Anything with fewer than two tokens is
//! skipped, and tokens after the dose are ignored. Negative indices parse but
//! refer to no voxel, so they are dropped.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::sparse::SparseDose;

// dosekit modules
use dosekit_utils::f;

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, trace};

/// Read every sample in a dose file
///
/// Returns a [SparseDose] keyed by linear voxel index. Convenience wrapper
/// around [DoseReader] with the progress bar disabled.
///
/// ```rust, no_run
/// # use dosekit_dose::read_dose;
/// let dose = read_dose("Results/dose_z_6mm.out").unwrap();
/// println!("{} voxels scored", dose.len());
/// ```
pub fn read_dose<P: AsRef<Path>>(path: P) -> Result<SparseDose> {
    DoseReader::new().read(path)
}

/// Configurable reader for dose sample files
///
/// Dose files for fine phantoms run to millions of lines, so a line counter
/// can be shown on stderr while reading.
///
/// ```rust, no_run
/// # use dosekit_dose::DoseReader;
/// let mut reader = DoseReader::new();
/// reader.enable_progress();
/// let dose = reader.read("Results/dose_z_6mm.out").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DoseReader {
    /// Print a line counter while reading
    show_progress: bool,
}

impl DoseReader {
    /// Reader with the progress bar disabled
    pub fn new() -> Self {
        Default::default()
    }

    /// Print the kdam line counter while reading
    pub fn enable_progress(&mut self) {
        self.show_progress = true;
    }

    /// Read the file at `path`
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<SparseDose> {
        let path = path.as_ref();
        debug!("Reading dose samples from {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        self.parse(BufReader::new(file))
    }

    /// Read samples from any buffered source
    ///
    /// ```rust
    /// # use dosekit_dose::DoseReader;
    /// let text = "0 0.5\n\n7 0.25 extra\nnoise\n";
    /// let dose = DoseReader::new().parse(text.as_bytes()).unwrap();
    /// assert_eq!(dose.len(), 2);
    /// assert_eq!(dose.get(7), Some(0.25));
    /// ```
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<SparseDose> {
        let mut progress_bar = self.init_progress_bar()?;
        if self.show_progress {
            progress_bar.refresh()?;
        }

        let mut dose = SparseDose::new();
        let mut replaced = 0;
        let mut negative = 0;

        for (n, line) in reader.lines().enumerate() {
            progress_bar.update(1)?;
            let line = line?;

            let Some((index, value)) = parsers::sample_tokens(&line) else {
                trace!("line {}: skipped \"{}\"", n + 1, line.trim_end());
                continue;
            };

            let (_, index) = parsers::index(index)
                .map_err(|_| malformed(n + 1, &line, f!("bad index \"{index}\"")))?;
            let (_, value) = parsers::dose(value)
                .map_err(|_| malformed(n + 1, &line, f!("bad dose \"{value}\"")))?;

            if index < 0 {
                negative += 1;
                continue;
            }
            let index = usize::try_from(index)
                .map_err(|_| malformed(n + 1, &line, f!("index {index} too large")))?;

            if dose.insert(index, value).is_some() {
                replaced += 1;
            }
        }

        // clean spacing after the counter
        if self.show_progress {
            eprintln!()
        }

        if negative > 0 {
            debug!("{negative} sample(s) with a negative index dropped");
        }
        if replaced > 0 {
            debug!("{replaced} duplicate indices replaced by later lines");
        }
        debug!("Read {} dose samples", dose.len());
        Ok(dose)
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self) -> Result<Bar> {
        BarBuilder::default()
            .unit(" lines")
            .unit_scale(true)
            .disable(!self.show_progress)
            .bar_format("{count} lines [{rate} lines/s]   ")
            .build()
            .map_err(Error::ProgressBar)
    }
}

fn malformed(line: usize, content: &str, reason: String) -> Error {
    Error::MalformedLine {
        line,
        content: content.trim_end().to_string(),
        reason,
    }
}
