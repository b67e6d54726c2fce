//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the test helpers and the host runner.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod file_system;
mod globals_repository;
mod key_value_store;
mod next_request;
mod reporter;

pub use clock::Clock;
pub use file_system::{FileSystem, FileSystemError};
pub use globals_repository::{GlobalsError, GlobalsRepository};
pub use key_value_store::KeyValueStore;
pub use next_request::NextRequestScheduler;
pub use reporter::Reporter;
