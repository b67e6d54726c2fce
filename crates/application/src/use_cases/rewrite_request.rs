//! Path-matched request rewriting
//!
//! Lets a collection add fields to the body of every request whose URL path
//! matches one of a rule's fragments, before the request is sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use ptf_domain::OutgoingRequest;

use crate::ApplicationResult;
use crate::use_cases::request_body::RequestBodyEditor;

/// Fields merged into requests whose path contains one of `path_fragments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Substrings matched against the request URL path.
    pub path_fragments: Vec<String>,
    /// Fields merged into the request body on a match.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RewriteRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(path_fragments: Vec<String>, fields: Map<String, Value>) -> Self {
        Self {
            path_fragments,
            fields,
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.path_fragments
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }
}

/// Applies [`RewriteRule`]s to outgoing requests.
#[derive(Debug, Clone, Default)]
pub struct RequestRewriter {
    rules: Vec<RewriteRule>,
}

impl RequestRewriter {
    /// Creates a rewriter from rules, applied in order.
    #[must_use]
    pub const fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Merges the fields of every matching rule into the request body.
    ///
    /// Returns true if any rule matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing body is not a JSON object.
    pub fn apply(&self, request: &mut OutgoingRequest) -> ApplicationResult<bool> {
        let path = request_path(&request.url);
        let mut matched = false;

        for rule in self.rules.iter().filter(|r| r.matches(&path)) {
            tracing::debug!(path = %path, fields = rule.fields.len(), "rewriting request body");
            RequestBodyEditor::new(request).merge_request_body(rule.fields.clone())?;
            matched = true;
        }

        Ok(matched)
    }
}

/// URL path of `url`, or the raw text when it does not parse
/// (e.g. it still starts with a `{{base_url}}` placeholder).
fn request_path(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), |parsed| parsed.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ptf_domain::RequestBody;
    use serde_json::json;

    fn rule(fragment: &str, fields: Value) -> RewriteRule {
        let Value::Object(fields) = fields else {
            return RewriteRule::new(vec![fragment.to_string()], Map::new());
        };
        RewriteRule::new(vec![fragment.to_string()], fields)
    }

    fn body(request: &OutgoingRequest) -> Value {
        serde_json::from_str(&request.body.content).expect("json body")
    }

    #[test]
    fn test_matching_path_is_rewritten() {
        let rewriter = RequestRewriter::new(vec![rule(
            "/api/products",
            json!({"user_id": "{{user_id}}"}),
        )]);
        let mut request = OutgoingRequest::new("https://api.test/api/products/options?page=2")
            .with_body(RequestBody::json(r#"{"page": 2}"#));

        assert!(rewriter.apply(&mut request).expect("apply"));
        assert_eq!(body(&request), json!({"page": 2, "user_id": "{{user_id}}"}));
    }

    #[test]
    fn test_query_string_is_not_matched() {
        let rewriter = RequestRewriter::new(vec![rule("/api/products", json!({"x": 1}))]);
        let mut request = OutgoingRequest::new("https://api.test/other?next=/api/products");

        assert!(!rewriter.apply(&mut request).expect("apply"));
        assert!(request.body.is_blank());
    }

    #[test]
    fn test_unparsed_url_matches_raw_text() {
        let rewriter = RequestRewriter::new(vec![rule("/api/products", json!({"x": 1}))]);
        let mut request = OutgoingRequest::new("{{base_url}}/api/products");

        assert!(rewriter.apply(&mut request).expect("apply"));
        assert_eq!(body(&request), json!({"x": 1}));
    }

    #[test]
    fn test_later_rules_win() {
        let rewriter = RequestRewriter::new(vec![
            rule("/api", json!({"scope": "api"})),
            rule("/api/products", json!({"scope": "products"})),
        ]);
        let mut request = OutgoingRequest::new("https://api.test/api/products");

        assert!(rewriter.apply(&mut request).expect("apply"));
        assert_eq!(body(&request), json!({"scope": "products"}));
    }
}
