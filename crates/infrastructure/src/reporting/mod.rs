//! Assertion reporting adapters.

mod collecting;

pub use collecting::CollectingReporter;
