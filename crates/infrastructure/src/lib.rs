//! PTF Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod reporting;
pub mod runner;
pub mod serialization;

pub use adapters::SystemClock;
pub use persistence::{FileGlobalsRepository, TokioFileSystem};
pub use reporting::CollectingReporter;
pub use runner::NextRequestSlot;
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
