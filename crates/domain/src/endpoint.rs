//! Endpoint descriptors and the response shapes they expect.

use serde::{Deserialize, Serialize};

/// Name of the list property inside a query-scoped response object.
pub const QUERY_OPTIONS_KEY: &str = "options";

/// Describes one API endpoint under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Human-readable endpoint name, used in assertion labels.
    pub name: String,
    /// Top-level response property holding the options.
    pub key: String,
    /// Property nested under `key` that holds the list, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_key: Option<String>,
}

impl EndpointDescriptor {
    /// Creates a descriptor for a flat or query-scoped options endpoint.
    #[must_use]
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            options_key: None,
        }
    }

    /// Sets the nested options key (builder pattern).
    #[must_use]
    pub fn with_options_key(mut self, options_key: impl Into<String>) -> Self {
        self.options_key = Some(options_key.into());
        self
    }

    /// Resolves the response shape this endpoint is validated against.
    #[must_use]
    pub fn shape(&self, expects_query: bool) -> ResponseShape {
        ResponseShape::resolve(self, expects_query)
    }
}

/// Where the options list lives inside `response[key]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// `response[key]` is the list.
    Flat,
    /// `response[key][options_key]` is the list.
    NestedUnderKey(String),
    /// `response[key]` is an object whose `options` property is the list.
    QueryScoped,
}

impl ResponseShape {
    /// Picks the shape from caller flags. Query scoping wins over a nested key.
    #[must_use]
    pub fn resolve(endpoint: &EndpointDescriptor, expects_query: bool) -> Self {
        if expects_query {
            return Self::QueryScoped;
        }
        match &endpoint.options_key {
            Some(key) if !key.is_empty() => Self::NestedUnderKey(key.clone()),
            _ => Self::Flat,
        }
    }

    /// Short description used in failure messages.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Flat => "a list".to_string(),
            Self::NestedUnderKey(key) => format!("an object with a '{key}' list"),
            Self::QueryScoped => format!("an object with an '{QUERY_OPTIONS_KEY}' list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_resolution() {
        let flat = EndpointDescriptor::new("Accounts", "accounts_options");
        assert_eq!(flat.shape(false), ResponseShape::Flat);
        assert_eq!(flat.shape(true), ResponseShape::QueryScoped);

        let nested = flat.with_options_key("items");
        assert_eq!(
            nested.shape(false),
            ResponseShape::NestedUnderKey("items".to_string())
        );
        assert_eq!(nested.shape(true), ResponseShape::QueryScoped);
    }

    #[test]
    fn test_empty_options_key_is_flat() {
        let endpoint = EndpointDescriptor::new("Users", "users").with_options_key("");
        assert_eq!(endpoint.shape(false), ResponseShape::Flat);
    }

    #[test]
    fn test_descriptor_deserializes_without_options_key() {
        let endpoint: EndpointDescriptor =
            serde_json::from_str(r#"{"name": "Users", "key": "users"}"#).expect("valid json");
        assert_eq!(endpoint.options_key, None);
    }
}
