use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::block::User;

/// A text message posted to a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Block ID of the message
    #[serde(default)]
    pub id: String,

    /// ID of the thread the message was posted to
    #[serde(default)]
    pub thread: String,

    /// Message body
    #[serde(default)]
    pub body: String,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Peer ID of the author
    #[serde(default)]
    pub author: String,

    /// Display name of the author
    #[serde(default)]
    pub username: String,

    /// Avatar of the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Author profile, sent by newer nodes in place of `username`/`avatar`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Comments on the message, passed through as sent
    #[serde(default)]
    pub comments: Vec<Value>,

    /// Likes on the message, passed through as sent
    #[serde(default)]
    pub likes: Vec<Value>,

    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextList {
    /// Messages, newest first
    #[serde(default)]
    pub items: Vec<Text>,
}

impl TextList {
    /// Number of messages on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offset to request the page after this one
    ///
    /// This is the ID of the last message; `None` when the page is empty.
    pub fn next_offset(&self) -> Option<&str> {
        self.items.last().map(|text| text.id.as_str())
    }
}
