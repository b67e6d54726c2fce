//! Clock port

use chrono::{DateTime, Utc};

/// Source of the current time for run timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
