//! Request body editing use case

use serde_json::{Map, Value};

use ptf_domain::{DomainError, DomainResult, OutgoingRequest, RequestBody};

use crate::{ApplicationError, ApplicationResult};

/// Parses the outgoing request body as a JSON object.
///
/// A missing or blank body (and a literal `null`) reads as an empty object.
///
/// # Errors
///
/// Returns `DomainError::InvalidBody` if the body is not JSON or not an
/// object. Unquoted `{{variable}}` placeholders are the usual culprit.
pub fn read_request_body(request: &OutgoingRequest) -> DomainResult<Map<String, Value>> {
    if request.body.is_blank() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_str(&request.body.content)
        .map_err(|e| DomainError::InvalidBody(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(DomainError::InvalidBody(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

/// Reads and rewrites the body of a request before it is sent.
pub struct RequestBodyEditor<'a> {
    request: &'a mut OutgoingRequest,
}

impl<'a> RequestBodyEditor<'a> {
    /// Creates an editor for `request`.
    pub const fn new(request: &'a mut OutgoingRequest) -> Self {
        Self { request }
    }

    /// Returns the current body as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn read_request_body(&self) -> ApplicationResult<Map<String, Value>> {
        Ok(read_request_body(self.request)?)
    }

    /// Shallow-merges `new_fields` over the current body; new fields win.
    ///
    /// The merged object is written back as the raw body, typed
    /// `application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current body is not a JSON object.
    pub fn merge_request_body(&mut self, new_fields: Map<String, Value>) -> ApplicationResult<()> {
        let mut merged = self.read_request_body()?;
        merged.extend(new_fields);

        let content = serde_json::to_string(&Value::Object(merged))
            .map_err(|e| ApplicationError::Serialization(e.to_string()))?;

        self.request.body = RequestBody::json(content);
        Ok(())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
