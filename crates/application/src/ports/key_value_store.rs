//! Key-value store port

use ptf_domain::Globals;

/// Persisted string globals shared by every invocation of a test run.
///
/// Implementations only need to keep values between invocations; the core
/// serializes anything structured before storing it.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key`, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<String>;

    /// Returns true if `key` holds a value.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl KeyValueStore for Globals {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: String) {
        Self::set(self, key, value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        Self::remove(self, key)
    }

    fn has(&self, key: &str) -> bool {
        Self::has(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globals_as_store() {
        let mut globals = Globals::new();
        let store: &mut dyn KeyValueStore = &mut globals;

        assert!(!store.has("token"));
        store.set("token", "abc".to_string());
        assert_eq!(store.get("token"), Some("abc".to_string()));
        assert_eq!(store.remove("token"), Some("abc".to_string()));
        assert!(!store.has("token"));
    }
}
