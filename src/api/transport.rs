//! HTTP transport used by every API module

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::config::ApiConfig;
use super::error::{ApiError, Result};
use super::response::ApiResponse;

/// A single request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Path segments, each sent percent-encoded as one segment
    pub segments: Vec<String>,
    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request for `segments` with the given verb
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    /// Create a POST request
    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    /// Create a DELETE request
    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter (builder pattern)
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is present (builder pattern)
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Attach a JSON body (builder pattern)
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path relative to the base URL, segments joined by '/'
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Path and query with caller-supplied values masked, for logging
    ///
    /// Routes alternate between fixed names and values
    /// (`threads/{id}/messages`, `tokens/{token}`), so odd segments are
    /// replaced with `*`. Query values are dropped and only names kept.
    pub fn redacted_path(&self) -> String {
        let mut path = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| if i % 2 == 1 { "*" } else { segment.as_str() })
            .collect::<Vec<_>>()
            .join("/");
        if !self.query.is_empty() {
            let names: Vec<&str> = self.query.iter().map(|(name, _)| name.as_str()).collect();
            path.push('?');
            path.push_str(&names.join("&"));
        }
        path
    }

    /// Check that every segment stays a single literal path segment
    ///
    /// Empty, `.` and `..` segments are rewritten by URL normalisation and
    /// would address a different route, so they are refused.
    pub fn validate_segments(&self) -> Result<()> {
        for segment in &self.segments {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(ApiError::InvalidRequest(format!(
                    "path segment '{}' is not allowed in {} {}",
                    segment,
                    self.method,
                    self.redacted_path()
                )));
            }
        }
        Ok(())
    }

    /// Value of the first query parameter called `name`
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Capability every API module is built on
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the raw response
    ///
    /// Non-2xx statuses are returned as responses, not errors; only transport
    /// failures produce `Err`.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// `HttpTransport` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL every request path is joined onto
    base_url: Url,
    /// Bearer token injected into every request
    auth_token: Option<String>,
}

impl ReqwestTransport {
    /// Create a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            ApiError::TransportError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            http_client,
            base_url: config.base_url()?,
            auth_token: config.auth_token.clone(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute URL for a request
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if a segment is empty, `.` or `..`.
    pub fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        request.validate_segments()?;
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::ConfigError(format!("'{}' cannot be used as a base URL", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(request.segments.iter());
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.build_url(&request)?;
        let route = request.redacted_path();
        debug!(method = %request.method, %route, "sending request");

        let mut builder = self.http_client.request(request.method.clone(), url);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(
            method = %request.method,
            %route,
            status = status.as_u16(),
            "received response"
        );

        Ok(ApiResponse::new(status, body))
    }
}
