//! Raw responses and the status-code checks applied to them

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::{ApiError, Result};

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status returned by the server
    pub status: StatusCode,
    /// Raw response body
    pub body: Bytes,
}

impl ApiResponse {
    /// Create a response from a status and body
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a response with an empty body
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, Bytes::new())
    }

    /// Create a response whose body is the JSON encoding of `value`
    pub fn json_body<T: serde::Serialize>(status: StatusCode, value: &T) -> Result<Self> {
        Ok(Self::new(status, serde_json::to_vec(value)?))
    }

    /// Body decoded as lossy UTF-8
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Fail with `HttpError` unless the status is 2xx
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    /// Decode a 2xx JSON body into `T`
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.error_for_status()?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Return a 2xx body as text
    pub fn text(self) -> Result<String> {
        let response = self.error_for_status()?;
        String::from_utf8(response.body.to_vec())
            .map_err(|e| ApiError::SerializationError(format!("Response is not UTF-8: {}", e)))
    }

    /// Map the status to a boolean according to `check`
    ///
    /// Statuses the check does not recognise become `HttpError`.
    pub fn check(self, check: StatusCheck) -> Result<bool> {
        if self.status == check.success {
            Ok(true)
        } else if check.negative.contains(&self.status) {
            Ok(false)
        } else {
            warn!(
                status = self.status.as_u16(),
                expected = check.success.as_u16(),
                "unexpected status for boolean check"
            );
            Err(self.into_error())
        }
    }

    fn into_error(self) -> ApiError {
        ApiError::HttpError {
            status: self.status.as_u16(),
            body: self.body_text(),
        }
    }
}

/// Status codes that turn a request into `true` or `false`
#[derive(Debug, Clone, Copy)]
pub struct StatusCheck {
    /// The only status that means `true`
    pub success: StatusCode,
    /// Statuses that mean `false`
    pub negative: &'static [StatusCode],
}

impl StatusCheck {
    /// Create a check with no `false` statuses
    pub const fn new(success: StatusCode) -> Self {
        Self {
            success,
            negative: &[],
        }
    }

    /// Set the statuses that mean `false` (builder pattern)
    pub const fn with_negative(mut self, negative: &'static [StatusCode]) -> Self {
        self.negative = negative;
        self
    }
}
