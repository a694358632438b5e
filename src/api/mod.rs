//! Shared HTTP layer
//!
//! Every API module holds an `Arc<dyn HttpTransport>` and turns each call into
//! exactly one `ApiRequest`. The default transport is `ReqwestTransport`,
//! which resolves paths against `ApiConfig::base_url` and injects the bearer
//! token.

pub mod config;
pub mod error;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use response::{ApiResponse, StatusCheck};
pub use transport::{ApiRequest, HttpTransport, ReqwestTransport};
