//! Debug dump of the current exchange.

use ptf_domain::{OutgoingRequest, ReceivedResponse};

/// Logs `message` with the request and, if present, the response at debug level.
pub fn log_context(message: &str, request: &OutgoingRequest, response: Option<&ReceivedResponse>) {
    match response {
        Some(response) => tracing::debug!(
            url = %request.url,
            request_body = %request.body.content,
            status = response.status,
            response_body = %response.body,
            "{message}"
        ),
        None => tracing::debug!(
            url = %request.url,
            request_body = %request.body.content,
            "{message}"
        ),
    }
}
