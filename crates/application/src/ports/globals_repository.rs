//! Globals repository port
//!
//! Defines the interface for persisting the globals snapshot between
//! invocations of a test script.

use async_trait::async_trait;
use std::path::Path;

use ptf_domain::Globals;

/// Errors that can occur while loading or saving globals.
#[derive(Debug, thiserror::Error)]
pub enum GlobalsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for globals persistence.
#[async_trait]
pub trait GlobalsRepository: Send + Sync {
    /// Loads the globals stored at `path`.
    ///
    /// A missing file is an empty snapshot, not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    async fn load(&self, path: &Path) -> Result<Globals, GlobalsError>;

    /// Saves the globals to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    async fn save(&self, path: &Path, globals: &Globals) -> Result<(), GlobalsError>;
}
