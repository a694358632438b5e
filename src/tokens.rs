//! Cafe access tokens
//!
//! Tokens allow other peers to register with a Cafe peer. The Cafe only keeps
//! a bcrypt hash of each token, so the plaintext returned by `add` cannot be
//! retrieved again.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::api::{ApiRequest, HttpTransport, Result, StatusCheck};

const VALIDATE_CHECK: StatusCheck = StatusCheck::new(StatusCode::OK).with_negative(&[
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
]);

const REMOVE_CHECK: StatusCheck =
    StatusCheck::new(StatusCode::NO_CONTENT).with_negative(&[StatusCode::NOT_FOUND]);

/// Options for creating a token
#[derive(Debug, Clone, PartialEq)]
pub struct AddOptions {
    /// Existing token to register instead of generating one
    pub token: Option<String>,

    /// Whether the Cafe stores a hash of the token
    pub store: bool,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            token: None,
            store: true,
        }
    }
}

impl AddOptions {
    /// Register an existing token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set whether the token is stored (builder pattern)
    pub fn with_store(mut self, store: bool) -> Self {
        self.store = store;
        self
    }
}

/// Client for the Cafe token endpoints
#[derive(Clone)]
pub struct Tokens {
    transport: Arc<dyn HttpTransport>,
}

impl Tokens {
    /// Create a tokens client on top of `transport`
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create an access token
    ///
    /// Without `options.token` the Cafe generates 44 random bytes and returns
    /// them base58 encoded. With `store` unset the token is generated but not
    /// saved in the Cafe db.
    pub async fn add(&self, options: AddOptions) -> Result<String> {
        let request = ApiRequest::post(&["tokens"])
            .query_opt("token", options.token)
            .query("store", options.store);
        self.transport.execute(request).await?.text()
    }

    /// Check whether a token is valid
    ///
    /// Returns `true` on 200 and `false` on 401, 403 or 404.
    pub async fn validate(&self, token: &str) -> Result<bool> {
        let request = ApiRequest::get(&["tokens", token]);
        self.transport.execute(request).await?.check(VALIDATE_CHECK)
    }

    /// List the stored token hashes
    ///
    /// Hashes are not usable as credentials.
    pub async fn list(&self) -> Result<Vec<String>> {
        let request = ApiRequest::get(&["tokens"]);
        self.transport.execute(request).await?.json()
    }

    /// Remove a stored token
    ///
    /// Returns `true` on 204 and `false` on 404.
    pub async fn remove(&self, token: &str) -> Result<bool> {
        let request = ApiRequest::delete(&["tokens", token]);
        self.transport.execute(request).await?.check(REMOVE_CHECK)
    }
}
