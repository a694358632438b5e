//! Error types for the HTTP API layer

use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the Textile HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status the operation does not accept
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Network, connect or timeout failures
    #[error("Transport error: {0}")]
    TransportError(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Status code carried by an `HttpError`, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ApiError::TransportError(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::ConfigError(format!("Invalid URL: {}", err))
    }
}
