use std::sync::Arc;

use crate::api::{ApiConfig, HttpTransport, ReqwestTransport, Result};
use crate::messages::Messages;
use crate::notifications::Notifications;
use crate::tokens::Tokens;

/// Entry point to the Textile HTTP API
///
/// Cloning is cheap; all clones share one transport.
#[derive(Clone)]
pub struct TextileClient {
    transport: Arc<dyn HttpTransport>,
}

impl TextileClient {
    /// Create a client backed by `ReqwestTransport`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use textile_client::{ApiConfig, TextileClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TextileClient::new(ApiConfig::default().with_auth_token("secret"))?;
    ///
    ///     let text = client.messages().add("12D3Thread", "hello").await?;
    ///     let unread = client.notifications().list().await?.unread().count();
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client on top of an existing transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Thread message endpoints
    pub fn messages(&self) -> Messages {
        Messages::new(self.transport.clone())
    }

    /// Notification endpoints
    pub fn notifications(&self) -> Notifications {
        Notifications::new(self.transport.clone())
    }

    /// Cafe token endpoints
    pub fn tokens(&self) -> Tokens {
        Tokens::new(self.transport.clone())
    }
}
