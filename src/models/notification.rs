use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::block::User;

/// Account or thread activity record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID
    #[serde(default)]
    pub id: String,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Peer ID that caused the notification
    #[serde(default)]
    pub actor: String,

    /// Profile of the actor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// ID of the subject, usually a thread
    #[serde(default)]
    pub subject: String,

    /// Human readable subject
    #[serde(default)]
    pub subject_desc: String,

    /// Block that triggered the notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,

    /// Target of the block, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Notification type (e.g. "MESSAGE_ADDED")
    #[serde(rename = "type", default)]
    pub notification_type: String,

    /// Notification text
    #[serde(default)]
    pub body: String,

    /// Whether the notification has been read
    #[serde(default)]
    pub read: bool,

    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// All notifications for the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationList {
    /// Notifications, newest first
    #[serde(default)]
    pub items: Vec<Notification>,
}

impl NotificationList {
    /// Notifications not yet marked read
    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| !n.read)
    }
}
