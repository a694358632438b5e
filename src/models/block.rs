use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block type written when a message is ignored
pub const IGNORE_BLOCK_TYPE: &str = "IGNORE";

/// Generic append-only record in a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block ID
    #[serde(default)]
    pub id: String,

    /// ID of the thread the block belongs to
    #[serde(default)]
    pub thread: String,

    /// Peer ID of the author
    #[serde(default)]
    pub author: String,

    /// Block type (e.g. "TEXT", "IGNORE")
    #[serde(rename = "type", default)]
    pub block_type: String,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// IDs of the parent blocks
    #[serde(default)]
    pub parents: Vec<String>,

    /// Block this one refers to (the ignored message for "IGNORE" blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Block body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Author profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    /// Whether this block marks another block as ignored
    pub fn is_ignore(&self) -> bool {
        self.block_type == IGNORE_BLOCK_TYPE
    }
}

/// Public profile of a peer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Account address
    #[serde(default)]
    pub address: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Avatar image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
