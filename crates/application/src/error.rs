//! Application error types

use ptf_domain::DomainError;
use thiserror::Error;

use crate::ports::GlobalsError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A persisted global holds data that cannot be interpreted.
    #[error("corrupted state under '{key}': {reason}")]
    StateCorruption {
        /// The globals key holding the corrupted value.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Loading or saving the globals snapshot failed.
    #[error("globals error: {0}")]
    Globals(#[from] GlobalsError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
