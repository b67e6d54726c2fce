//! File-based globals repository implementation.
//!
//! The globals snapshot is one JSON file. A missing file is an empty
//! snapshot so that the first invocation of a run needs no setup.

use std::path::Path;

use async_trait::async_trait;
use ptf_application::ports::{FileSystem, FileSystemError, GlobalsError, GlobalsRepository};
use ptf_domain::Globals;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

fn to_globals_error(e: FileSystemError) -> GlobalsError {
    match e {
        FileSystemError::Io(io_err) => GlobalsError::Io(io_err),
        FileSystemError::NotFound(path) => GlobalsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            path.display().to_string(),
        )),
        FileSystemError::PermissionDenied(path) => GlobalsError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        )),
    }
}

/// File-based globals repository.
#[derive(Debug, Clone)]
pub struct FileGlobalsRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileGlobalsRepository<F> {
    /// Creates a new file-based globals repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> GlobalsRepository for FileGlobalsRepository<F> {
    async fn load(&self, path: &Path) -> Result<Globals, GlobalsError> {
        if !self.fs.exists(path).await.map_err(to_globals_error)? {
            tracing::debug!(path = %path.display(), "no globals file, starting empty");
            return Ok(Globals::new());
        }

        let content = self.fs.read_file(path).await.map_err(to_globals_error)?;
        let globals: Globals =
            from_json_bytes(&content).map_err(|e| GlobalsError::Serialization(e.to_string()))?;

        tracing::debug!(path = %path.display(), count = globals.len(), "loaded globals");
        Ok(globals)
    }

    async fn save(&self, path: &Path, globals: &Globals) -> Result<(), GlobalsError> {
        let content =
            to_json_stable_bytes(globals).map_err(|e| GlobalsError::Serialization(e.to_string()))?;

        self.fs
            .write_file(path, &content)
            .await
            .map_err(to_globals_error)?;

        tracing::debug!(path = %path.display(), count = globals.len(), "saved globals");
        Ok(())
    }
}
