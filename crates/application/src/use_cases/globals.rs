//! Plain and JSON-encoded access to run globals.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::KeyValueStore;
use crate::{ApplicationError, ApplicationResult};

/// Returns the raw string stored under `key`.
pub fn get_global<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.get(key)
}

/// Returns the JSON value stored under `key`, decoded as `T`.
///
/// # Errors
///
/// Returns `ApplicationError::Serialization` if the stored text is not valid
/// JSON for `T`.
pub fn get_global_json<T, S>(store: &S, key: &str) -> ApplicationResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| ApplicationError::Serialization(format!("global '{key}': {e}")))
        })
        .transpose()
}

/// Stores `value` under `key` verbatim.
pub fn set_global<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: impl Into<String>) {
    store.set(key, value.into());
}

/// Stores `value` under `key` as compact JSON.
///
/// # Errors
///
/// Returns `ApplicationError::Serialization` if `value` cannot be serialized.
pub fn set_global_json<T, S>(store: &mut S, key: &str, value: &T) -> ApplicationResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value)
        .map_err(|e| ApplicationError::Serialization(format!("global '{key}': {e}")))?;
    store.set(key, encoded);
    Ok(())
}

/// Removes `key`, returning the value it held.
pub fn remove_global<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Option<String> {
    store.remove(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptf_domain::Globals;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user_id: u64,
        roles: Vec<String>,
    }

    #[test]
    fn test_plain_round_trip() {
        let mut globals = Globals::new();
        set_global(&mut globals, "base_url", "https://api.test");
        assert_eq!(get_global(&globals, "base_url").as_deref(), Some("https://api.test"));
        assert_eq!(get_global(&globals, "missing"), None);
    }

    #[test]
    fn test_json_global() {
        let mut globals = Globals::new();
        let session = Session {
            user_id: 7,
            roles: vec!["admin".to_string()],
        };
        set_global_json(&mut globals, "session", &session).expect("serializes");

        assert_eq!(globals.get("session"), Some(r#"{"user_id":7,"roles":["admin"]}"#));
        let loaded: Option<Session> = get_global_json(&globals, "session").expect("decodes");
        assert_eq!(loaded, Some(session));
    }

    #[test]
    fn test_missing_json_global_is_none() {
        let globals = Globals::new();
        let loaded: Option<Session> = get_global_json(&globals, "session").expect("absent is fine");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_remove_global() {
        let mut globals = Globals::new();
        set_global(&mut globals, "token", "abc");

        assert_eq!(remove_global(&mut globals, "token"), Some("abc".to_string()));
        assert_eq!(remove_global(&mut globals, "token"), None);
        assert!(globals.is_empty());
    }

    #[test]
    fn test_malformed_json_global() {
        let mut globals = Globals::new();
        globals.set("session", "{broken");
        let result: ApplicationResult<Option<Session>> = get_global_json(&globals, "session");
        assert!(matches!(result, Err(ApplicationError::Serialization(_))));
    }
}
