//! Thread messages
//!
//! Messages are added as blocks in a thread. Ignoring a message adds an
//! "IGNORE" block targeted at it; ignored messages are left out of `list`
//! results by the server.

use std::sync::Arc;

use crate::api::{ApiRequest, HttpTransport, Result};
use crate::models::{Block, Text, TextList};

/// Page size used when none is given
pub const DEFAULT_LIST_LIMIT: u32 = 5;

/// Options for listing thread messages
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    /// Thread to list; `None` lets the server pick the default thread
    pub thread: Option<String>,

    /// Message ID to continue after; `None` starts from the latest
    pub offset: Option<String>,

    /// Maximum messages to return
    pub limit: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            thread: None,
            offset: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListOptions {
    /// Create list options for a thread
    pub fn new(thread: impl Into<String>) -> Self {
        Self {
            thread: Some(thread.into()),
            ..Default::default()
        }
    }

    /// Set the offset (builder pattern)
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Set the page size (builder pattern)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Client for the message endpoints
#[derive(Clone)]
pub struct Messages {
    transport: Arc<dyn HttpTransport>,
}

impl Messages {
    /// Create a messages client on top of `transport`
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Add a message to a thread
    ///
    /// Returns the created message block.
    pub async fn add(&self, thread: &str, body: &str) -> Result<Text> {
        let request = ApiRequest::post(&["threads", thread, "messages"]).json(&[body])?;
        self.transport.execute(request).await?.json()
    }

    /// Retrieve a message by block ID
    pub async fn get(&self, id: &str) -> Result<Text> {
        let request = ApiRequest::get(&["messages", id]);
        self.transport.execute(request).await?.json()
    }

    /// Retrieve a page of thread messages
    ///
    /// # Example
    ///
    /// ```no_run
    /// use textile_client::{ApiConfig, TextileClient};
    /// use textile_client::messages::ListOptions;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TextileClient::new(ApiConfig::default())?;
    ///
    ///     let page = client.messages().list(ListOptions::new("12D3Thread")).await?;
    ///     if let Some(offset) = page.next_offset() {
    ///         let options = ListOptions::new("12D3Thread").with_offset(offset);
    ///         let older = client.messages().list(options).await?;
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, options: ListOptions) -> Result<TextList> {
        let request = ApiRequest::get(&["messages"])
            .query_opt("thread", options.thread)
            .query_opt("offset", options.offset)
            .query("limit", options.limit);
        self.transport.execute(request).await?.json()
    }

    /// Ignore a message by its ID
    ///
    /// Returns the added ignore block.
    pub async fn ignore(&self, id: &str) -> Result<Block> {
        let request = ApiRequest::delete(&["blocks", id]);
        self.transport.execute(request).await?.json()
    }
}
