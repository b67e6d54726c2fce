//! Response validation use case
//!
//! Asserts that a response matches the structure an endpoint promises.
//! Every check is reported on its own and a failed check never stops the
//! ones after it, so a single run shows every problem with the response.

use serde_json::{Map, Value};

use ptf_domain::{
    AssertionOutcome, EndpointDescriptor, OutgoingRequest, QUERY_OPTIONS_KEY, ReceivedResponse,
    ResponseShape, SUCCESS_STATUS,
};

use crate::ports::Reporter;
use crate::use_cases::request_body::read_request_body;

/// Label of the error-structure assertion.
pub const ERROR_SHAPE_LABEL: &str = "If client request errors, has correct structure for it";

/// Keys an unsuccessful response must carry.
pub const ERROR_KEYS: [&str; 3] = ["status", "error", "errors"];

/// Keys every option item must carry.
pub const OPTION_ITEM_KEYS: [&str; 2] = ["display", "value"];

/// Validates responses and reports each assertion to a [`Reporter`].
pub struct ResponseValidator<'r, R: ?Sized> {
    reporter: &'r mut R,
}

impl<'r, R: Reporter + ?Sized> ResponseValidator<'r, R> {
    /// Creates a validator reporting to `reporter`.
    pub const fn new(reporter: &'r mut R) -> Self {
        Self { reporter }
    }

    /// Checks the error structure of a response payload.
    ///
    /// Reports a single assertion. It fails when `success` is absent, or when
    /// `success` is falsy and any of `status`, `error`, `errors` is missing.
    pub fn validate_error_shape(&mut self, payload: &Value) {
        let outcome = match payload.get("success") {
            None => AssertionOutcome::Failed("response is missing 'success'".to_string()),
            Some(success) if is_truthy(success) => AssertionOutcome::Passed,
            Some(_) => {
                let missing = missing_keys(payload, &ERROR_KEYS);
                AssertionOutcome::check(missing.is_empty(), || {
                    format!("error response is missing keys: {}", missing.join(", "))
                })
            }
        };
        self.reporter.report(ERROR_SHAPE_LABEL, outcome);
    }

    /// Checks that the response status is 200.
    pub fn validate_success_status(&mut self, endpoint_name: &str, response: &ReceivedResponse) {
        let outcome = AssertionOutcome::check(response.status == SUCCESS_STATUS, || {
            format!("expected status {SUCCESS_STATUS}, got {}", response.status)
        });
        self.reporter.report(&format!("{endpoint_name}: Success"), outcome);
    }

    /// Checks that a response is a well-formed options list for `endpoint`.
    ///
    /// `expects_query` marks endpoints that take a search term: the request
    /// must then carry `query` and the response nests its list under
    /// `options`. A non-empty `format` request header is appended to the
    /// endpoint name in every label.
    pub fn validate_options_response(
        &mut self,
        request: &OutgoingRequest,
        response: &ReceivedResponse,
        endpoint: &EndpointDescriptor,
        expects_query: bool,
    ) {
        self.validate_error_shape(&response.body);

        let name = match request.scope() {
            Some(scope) => format!("{} - {scope}", endpoint.name),
            None => endpoint.name.clone(),
        };

        if expects_query {
            let outcome = match read_request_body(request) {
                Ok(payload) => AssertionOutcome::check(payload.contains_key("query"), || {
                    "request data is missing 'query'".to_string()
                }),
                Err(e) => AssertionOutcome::Failed(format!("request data is unreadable: {e}")),
            };
            self.reporter.report(&format!("{name}: Request data includes query"), outcome);
        }

        self.validate_success_status(&name, response);

        let key = endpoint.key.as_str();
        self.reporter.report(
            &format!("{name}: Basic Structure"),
            AssertionOutcome::check(response.field(key).is_some(), || {
                format!("Response missing {key}")
            }),
        );

        let shape = endpoint.shape(expects_query);
        let options = match extract_options(&response.body, key, &shape) {
            Ok(options) => {
                self.reporter.report(&format!("{name}: Options list"), AssertionOutcome::Passed);
                options
            }
            Err(reason) => {
                self.reporter.report(
                    &format!("{name}: Options list"),
                    AssertionOutcome::Failed(format!(
                        "{name} is missing expected options property: {reason}"
                    )),
                );
                return;
            }
        };

        if options.is_empty() {
            return;
        }

        let mut all_valid = true;
        for (index, item) in options.iter().enumerate() {
            if let Err(reason) = check_option_item(item) {
                all_valid = false;
                self.reporter.report(
                    &format!("{name}: Option item [{index}]"),
                    AssertionOutcome::Failed(format!(
                        "An item [{index}] in the array {reason}"
                    )),
                );
            }
        }
        if all_valid {
            self.reporter.report(&format!("{name}: Option items"), AssertionOutcome::Passed);
        }
    }
}

/// Pulls the options list out of `payload` according to `shape`.
fn extract_options<'v>(
    payload: &'v Value,
    key: &str,
    shape: &ResponseShape,
) -> Result<&'v Vec<Value>, String> {
    let container = payload.get(key);
    match shape {
        ResponseShape::Flat => container
            .and_then(Value::as_array)
            .ok_or_else(|| format!("expected '{key}' to be {}", shape.description())),
        ResponseShape::NestedUnderKey(options_key) => container
            .and_then(|c| c.get(options_key.as_str()))
            .and_then(Value::as_array)
            .ok_or_else(|| format!("expected '{key}.{options_key}' to be a list")),
        ResponseShape::QueryScoped => {
            let object = container
                .and_then(Value::as_object)
                .filter(|o| o.contains_key(QUERY_OPTIONS_KEY))
                .ok_or_else(|| format!("expected '{key}' to be {}", shape.description()))?;
            object
                .get(QUERY_OPTIONS_KEY)
                .and_then(Value::as_array)
                .ok_or_else(|| "Options is not an array".to_string())
        }
    }
}

fn check_option_item(item: &Value) -> Result<(), String> {
    let Some(object) = item.as_object() else {
        return Err("is not an object".to_string());
    };
    let missing = missing_object_keys(object, &OPTION_ITEM_KEYS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("is missing expected keys: {}", missing.join(", ")))
    }
}

fn missing_keys<'k>(payload: &Value, keys: &[&'k str]) -> Vec<&'k str> {
    payload
        .as_object()
        .map_or_else(|| keys.to_vec(), |object| missing_object_keys(object, keys))
}

fn missing_object_keys<'k>(object: &Map<String, Value>, keys: &[&'k str]) -> Vec<&'k str> {
    keys.iter()
        .copied()
        .filter(|k| !object.contains_key(*k))
        .collect()
}

/// Loose truthiness: `null`, `false`, `0`, `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_normal() || f.is_subnormal()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
