#![warn(missing_docs)]

//! Entry point for the `window-manager` binary.

mod cli;
mod error;
mod resize;

use std::{io, process};

use clap::{Parser, error::ErrorKind};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::{Error, Result},
};

fn main() {
    if let Err(err) = run() {
        match &err {
            Error::Usage(e) => {
                // clap's own rendering, but a usage error exits 1.
                let _ignored = e.print();
            }
            other => {
                error!("{other}");
                println!("Error: {other}");
            }
        }
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(e.into()),
    };
    let env_filter = logging::env_filter_from_spec(&log.spec());
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    match command {
        Commands::Resize(args) => resize::run(&args),
    }
}
