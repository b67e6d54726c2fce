//! The outgoing request as seen by test scripts

mod body;
mod header;

use serde::{Deserialize, Serialize};

pub use body::{RequestBody, RequestBodyKind};
pub use header::{Header, Headers};

/// Header whose value scopes an options endpoint (e.g. a display format).
pub const SCOPE_HEADER: &str = "format";

/// The request a script is about to send, or has just sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingRequest {
    /// The request URL, possibly still containing `{{variables}}`.
    pub url: String,
    /// Request headers.
    #[serde(default)]
    pub headers: Headers,
    /// Request body.
    #[serde(default)]
    pub body: RequestBody,
}

impl OutgoingRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Returns the non-empty scope header value, if any.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.headers.get(SCOPE_HEADER).filter(|s| !s.is_empty())
    }
}
