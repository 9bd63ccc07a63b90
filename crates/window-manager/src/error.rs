//! Error handling for the window-manager binary.

use std::result;

use thiserror::Error;

/// Convenient result type for window-manager operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end the process with exit status 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command line; clap renders its own message.
    #[error("{0}")]
    Usage(#[from] clap::Error),
    /// Accessibility permission is missing.
    #[error("{0}")]
    Permission(#[from] permissions::Error),
    /// Configuration file could not be read, parsed or validated.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// The window could not be resolved or mutated.
    #[error("{0}")]
    Placement(#[from] winplace::Error),
}
