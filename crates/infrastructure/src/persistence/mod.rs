//! Persistence implementations for file-based storage.

mod file_system;
mod globals_repository;

pub use file_system::TokioFileSystem;
pub use globals_repository::FileGlobalsRepository;
