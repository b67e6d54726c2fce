//! Adapters for application ports backed by the host system.

mod system_clock;

pub use system_clock::SystemClock;
