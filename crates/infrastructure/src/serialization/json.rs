//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_stable`], returning bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Vec<u8>, SerializationError> {
    to_json_stable(value).map(String::into_bytes)
}

/// Deserializes JSON from bytes, pretty-printed or minified.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptf_domain::Globals;

    #[test]
    fn test_stable_output_format() {
        let mut globals = Globals::new();
        globals.set("zebra", "1");
        globals.set("apple", "2");

        let json = to_json_stable(&globals).expect("serialization should work");
        assert!(json.ends_with('\n'));
        assert!(json.contains("  \"schema_version\": 1"));

        let apple = json.find("apple").expect("apple present");
        let zebra = json.find("zebra").expect("zebra present");
        assert!(apple < zebra);
    }

    #[test]
    fn test_from_json_bytes_accepts_minified() {
        let globals: Globals = from_json_bytes(br#"{"schema_version":1,"values":{"k":"v"}}"#)
            .expect("deserialization should work");
        assert_eq!(globals.get("k"), Some("v"));
    }

    #[test]
    fn test_from_json_bytes_rejects_invalid() {
        let result: Result<Globals, _> = from_json_bytes(b"{");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
