//! Command line tool for dose profiles from voxelised phantom simulations
#![doc = include_str!("../readme.md")]

mod cli;
mod config;
mod error;
mod run;

// crate modules
use cli::Cli;
use config::Config;
use error::Result;
use run::{run, RunOptions};

// dosekit modules
use dosekit_utils::OptionExt;

// external crates
use clap::Parser;
use log::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(&cli) {
        error!("{e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    init_logging(cli)?;

    debug!(
        "Config file: {}",
        cli.config.as_ref().map(|p| p.display()).display()
    );
    let config = Config::resolve(cli)?;
    debug!("{config:#?}");

    let options = RunOptions {
        progress: !cli.quiet,
    };

    let written = run(&config, &options)?;
    info!(
        "Wrote {} files to {}",
        written.len(),
        config.output.display()
    );
    Ok(())
}

/// Info by default, more with each -v, errors only with -q
fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules([
            module_path!(),
            "dosekit_dose",
            "dosekit_phantom",
            "dosekit_utils",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_module_names(cli.verbose > 1)
        .init()?;
    Ok(())
}
