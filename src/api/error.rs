//! Normalized error type returned by every failing API call

use super::response::ApiErrorInfo;
use indexmap::IndexMap;
use thiserror::Error;

/// Per-field messages attached to a server-declared error
pub type ErrorDetails = IndexMap<String, Vec<String>>;

/// Symbolic codes produced by the client itself (server codes pass through as-is)
pub mod codes {
    pub const TIMEOUT_ERROR: &str = "TIMEOUT_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Fallback message for failures whose cause cannot be described
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Message used when a request exceeds its timeout
pub const TIMEOUT_ERROR_MESSAGE: &str = "The request timed out.";

/// Status reported for timed-out requests
pub const TIMEOUT_STATUS: u16 = 408;

/// The single error shape produced by [`super::ApiClient`].
///
/// Callers tell failure origins apart by `code` and `status` only:
///
/// | origin                  | status           | code                |
/// |-------------------------|------------------|---------------------|
/// | server error envelope   | transport status | server-supplied     |
/// | unrecognized error body | transport status | `UNKNOWN_ERROR`     |
/// | timeout                 | 408              | `TIMEOUT_ERROR`     |
/// | transport failure       | 0                | `NETWORK_ERROR`     |
/// | anything else           | 0                | `UNKNOWN_ERROR`     |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code}, status {status})")]
pub struct ApiClientError {
    pub message: String,
    pub status: u16,
    pub code: String,
    pub details: Option<ErrorDetails>,
}

impl ApiClientError {
    pub fn new(message: impl Into<String>, status: u16, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: code.into(),
            details: None,
        }
    }

    /// Build from a server-declared error envelope
    pub fn from_server(status: u16, info: ApiErrorInfo) -> Self {
        Self {
            message: info.message,
            status,
            code: info.code,
            details: info.details,
        }
    }

    /// Non-success response whose body did not match the error envelope
    pub fn unrecognized(status: u16) -> Self {
        Self::new(UNKNOWN_ERROR_MESSAGE, status, codes::UNKNOWN_ERROR)
    }

    pub fn timeout() -> Self {
        Self::new(TIMEOUT_ERROR_MESSAGE, TIMEOUT_STATUS, codes::TIMEOUT_ERROR)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(message, 0, codes::NETWORK_ERROR)
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_MESSAGE, 0, codes::UNKNOWN_ERROR)
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self::new(message, status, codes::DECODE_ERROR)
    }

    pub fn is_timeout(&self) -> bool {
        self.code == codes::TIMEOUT_ERROR
    }

    /// Messages recorded for one field, if the server sent any
    pub fn field_messages(&self, field: &str) -> &[String] {
        self.details
            .as_ref()
            .and_then(|d| d.get(field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
