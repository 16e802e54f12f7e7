//! Search engine error types.
//!
//! This module defines the failures a `SearchEngineClient` can report. They
//! carry no operation context; the document operations wrap them in a
//! `DocumentStoreError` that names the index and document involved.

use thiserror::Error;

/// Errors that can occur while talking to the search engine.
#[derive(Error, Debug)]
pub enum SearchEngineError {
    /// The request was rejected before being sent (e.g., missing required fields).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to establish connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The search engine answered with a non-success status code.
    #[error("Request failed with status {status}: {body}")]
    StatusError { status: u16, body: String },

    /// Failed to serialize a document for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The search engine response did not have the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchEngineError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a status error from a failed response.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Whether the engine reported that the index or document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StatusError { status: 404, .. })
    }
}

impl From<opensearch::Error> for SearchEngineError {
    fn from(err: opensearch::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = SearchEngineError::status(404, r#"{"error":"index_not_found_exception"}"#);

        assert_eq!(
            err.to_string(),
            r#"Request failed with status 404: {"error":"index_not_found_exception"}"#
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_not_found_only_for_404() {
        assert!(!SearchEngineError::status(500, "boom").is_not_found());
        assert!(!SearchEngineError::transport("connection reset").is_not_found());
    }
}
