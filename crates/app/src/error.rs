//! Command-line error type

use std::path::PathBuf;

use ptf_application::ApplicationError;
use ptf_application::ports::GlobalsError;
use ptf_domain::{DecodeError, DomainError};
use thiserror::Error;

/// Errors that end a command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// A use case failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Input data was invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A token could not be decoded.
    #[error("cannot decode token: {0}")]
    Decode(#[from] DecodeError),

    /// The globals file could not be loaded or saved.
    #[error(transparent)]
    Globals(#[from] GlobalsError),

    /// An input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Output could not be rendered as JSON.
    #[error("cannot render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
