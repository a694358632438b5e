//! Account notifications
//!
//! Notifications are generated by thread and account activity.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::api::{ApiRequest, HttpTransport, Result, StatusCheck};
use crate::models::NotificationList;

/// ID the server reads as "every notification"
pub const ALL: &str = "all";

const READ_CHECK: StatusCheck =
    StatusCheck::new(StatusCode::OK).with_negative(&[StatusCode::NOT_FOUND]);

/// Client for the notification endpoints
#[derive(Clone)]
pub struct Notifications {
    transport: Arc<dyn HttpTransport>,
}

impl Notifications {
    /// Create a notifications client on top of `transport`
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Retrieve all notifications, newest first
    pub async fn list(&self) -> Result<NotificationList> {
        let request = ApiRequest::get(&["notifications"]);
        self.transport.execute(request).await?.json()
    }

    /// Mark a notification as read
    ///
    /// Returns `true` on 200 and `false` on 404. Any other status is an error.
    pub async fn read(&self, id: &str) -> Result<bool> {
        let request = ApiRequest::post(&["notifications", id, "read"]);
        self.transport.execute(request).await?.check(READ_CHECK)
    }

    /// Mark all notifications as read
    pub async fn read_all(&self) -> Result<bool> {
        self.read(ALL).await
    }
}
