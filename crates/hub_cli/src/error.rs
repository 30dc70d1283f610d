//! Error types for the CLI.

use std::path::PathBuf;

use thiserror::Error;

use hub_iac::IacError;

/// Errors raised by the CLI itself, before or around library calls.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: IacError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
