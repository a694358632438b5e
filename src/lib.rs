//! Client for the Textile node HTTP API
//!
//! Each API module maps one-to-one onto a handful of REST endpoints and sends
//! exactly one request per call. There is no caching, batching or retrying.

// Shared HTTP layer and records
pub mod api;
pub mod models;

// API modules
pub mod messages;
pub mod notifications;
pub mod tokens;

mod client;

pub use api::{ApiConfig, ApiError, Result};
pub use client::TextileClient;
