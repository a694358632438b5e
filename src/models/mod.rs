//! Value records returned by the API
//!
//! All records are immutable snapshots of server state. Fields the server
//! sends that are not modelled here are kept verbatim in `extra`.

pub mod block;
pub mod notification;
pub mod text;

pub use block::{Block, User};
pub use notification::{Notification, NotificationList};
pub use text::{Text, TextList};
