//! Global values shared by every request of a test run

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of the run-wide key-value globals.
///
/// Values are always strings; structured data is stored JSON-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Globals {
    /// Schema version for migration support.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Global values by key.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

const fn default_schema_version() -> u32 {
    1
}

impl Globals {
    /// Creates an empty globals snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schema_version: 1,
            values: BTreeMap::new(),
        }
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Adds or replaces a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes a value by key.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globals_new() {
        let globals = Globals::new();
        assert_eq!(globals.schema_version, 1);
        assert!(globals.is_empty());
    }

    #[test]
    fn test_globals_set_and_get() {
        let mut globals = Globals::new();
        globals.set("token", "abc");

        assert!(globals.has("token"));
        assert_eq!(globals.get("token"), Some("abc"));
        assert_eq!(globals.len(), 1);
    }

    #[test]
    fn test_globals_remove() {
        let mut globals = Globals::new();
        globals.set("token", "abc");

        assert_eq!(globals.remove("token"), Some("abc".to_string()));
        assert!(!globals.has("token"));
    }

    #[test]
    fn test_globals_deserialize_defaults() {
        let globals: Globals = serde_json::from_str("{}").expect("valid json");
        assert_eq!(globals, Globals::new());
    }
}
