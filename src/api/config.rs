//! Connection configuration for the Textile HTTP API

use std::time::Duration;

use url::Url;

use super::error::{ApiError, Result};

/// Environment variable holding the API host URL
pub const ENV_URL: &str = "TEXTILE_API_URL";
/// Environment variable holding the API port
pub const ENV_PORT: &str = "TEXTILE_API_PORT";
/// Environment variable holding the API version number
pub const ENV_VERSION: &str = "TEXTILE_API_VERSION";
/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "TEXTILE_API_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "TEXTILE_API_TIMEOUT_SECS";

/// Settings used to build the HTTP transport
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme and host of the node, without port (e.g. "http://127.0.0.1")
    pub url: String,

    /// Port the node's API listens on
    pub port: u16,

    /// API version segment, rendered as `api/v{version}/`
    pub version: u32,

    /// Bearer token sent with every request
    pub auth_token: Option<String>,

    /// Connect timeout for the underlying HTTP client
    pub connect_timeout: Duration,

    /// Whole-request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1".to_string(),
            port: 40600,
            version: 0,
            auth_token: None,
            connect_timeout: Duration::from_secs(5),
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at `url:port` with all other defaults
    pub fn new(url: impl Into<String>, port: u16) -> Self {
        Self {
            url: url.into(),
            port,
            ..Default::default()
        }
    }

    /// Build a configuration from `TEXTILE_API_*` environment variables
    ///
    /// Unset variables keep their default value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_URL) {
            config.url = url;
        }
        if let Ok(port) = std::env::var(ENV_PORT) {
            config.port = parse_var(ENV_PORT, &port)?;
        }
        if let Ok(version) = std::env::var(ENV_VERSION) {
            config.version = parse_var(ENV_VERSION, &version)?;
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout = Some(Duration::from_secs(parse_var(ENV_TIMEOUT_SECS, &secs)?));
        }

        Ok(config)
    }

    /// Set the API version (builder pattern)
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the bearer token (builder pattern)
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the connect timeout (builder pattern)
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the base URL every request path is joined onto
    ///
    /// # Example
    ///
    /// ```
    /// use textile_client::api::ApiConfig;
    ///
    /// let base = ApiConfig::default().base_url().unwrap();
    /// assert_eq!(base.as_str(), "http://127.0.0.1:40600/api/v0/");
    /// ```
    ///
    /// # Errors
    ///
    /// `url` must be a scheme and host only. A path, query, fragment or
    /// port in it is a `ConfigError`, since the port comes from `port` and
    /// the path from `version`.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        if url.cannot_be_a_base() || !url.has_host() {
            return Err(ApiError::ConfigError(format!(
                "'{}' cannot be used as a base URL",
                self.url
            )));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::ConfigError(format!(
                "'{}' must not carry a path, query or fragment",
                self.url
            )));
        }
        if url.port().is_some() {
            return Err(ApiError::ConfigError(format!(
                "'{}' must not carry a port; set the port separately",
                self.url
            )));
        }

        url.set_port(Some(self.port)).map_err(|_| {
            ApiError::ConfigError(format!("'{}' does not accept a port", self.url))
        })?;
        url.set_path(&format!("/api/v{}/", self.version));
        Ok(url)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::ConfigError(format!("{} has an invalid value '{}'", name, value)))
}
