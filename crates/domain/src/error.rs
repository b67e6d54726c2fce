//! Domain error types

use thiserror::Error;

/// Errors raised while decoding a structured (dot-delimited) token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token has no second segment.
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid URL-safe base64.
    #[error("payload segment is not valid base64: {0}")]
    InvalidBase64(String),

    /// The decoded payload is not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// The decoded payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request body cannot be read as a JSON object.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A structured token could not be decoded.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] DecodeError),

    /// A response payload is not valid JSON.
    #[error("invalid response payload: {0}")]
    InvalidResponse(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
