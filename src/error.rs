//! Client error types.
//!
//! Every failure of the item API is local to the main view and ends up as an error notice.

use thiserror::Error;

/// Result type for item API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected `{ data: ... }` shape.
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request body could not be serialized.
    #[error("Serialization error: {0}")]
    Request(String),

    #[error("Item name cannot be empty")]
    EmptyName,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
