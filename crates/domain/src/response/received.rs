//! A response as handed to test scripts: status plus parsed JSON payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Status code every successful options request must return.
pub const SUCCESS_STATUS: u16 = 200;

/// HTTP response with its JSON payload already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed response payload
    pub body: Value,
}

impl ReceivedResponse {
    /// Creates a response from an already parsed payload.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResponse` if the body is not JSON.
    pub fn parse(status: u16, raw: &str) -> DomainResult<Self> {
        let body =
            serde_json::from_str(raw).map_err(|e| DomainError::InvalidResponse(e.to_string()))?;
        Ok(Self { status, body })
    }

    /// Returns the top-level property `key` of the payload.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response() {
        let response = ReceivedResponse::parse(200, r#"{"items": []}"#).expect("valid json");
        assert_eq!(response.status, 200);
        assert_eq!(response.field("items"), Some(&json!([])));
        assert_eq!(response.field("missing"), None);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = ReceivedResponse::parse(502, "<html>Bad Gateway</html>");
        assert!(matches!(result, Err(DomainError::InvalidResponse(_))));
    }
}
