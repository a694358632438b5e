//! In-memory Cafe node used by the contract tests
//!
//! `FakeCafe` implements `HttpTransport` and answers requests the way a
//! Textile node does: ignored messages are hidden from listings, generated
//! tokens are 44 random bytes in base58, and only hashes of stored tokens are
//! ever listed.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use reqwest::StatusCode;
use serde_json::json;
use sha2::{Digest, Sha256};
use textile_client::api::{ApiRequest, ApiResponse, HttpTransport, Result};
use textile_client::models::{Block, Notification, NotificationList, Text, TextList};
use uuid::Uuid;

/// Thread the node falls back to when a listing names none
pub const DEFAULT_THREAD: &str = "default";

/// Size of generated tokens before encoding
pub const TOKEN_BYTES: usize = 44;

#[derive(Default)]
struct State {
    /// Messages, oldest first
    texts: Vec<Text>,
    ignored: HashSet<String>,
    token_hashes: Vec<String>,
    notifications: Vec<Notification>,
}

#[derive(Default)]
pub struct FakeCafe {
    state: Mutex<State>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeCafe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed unread notifications with the given IDs
    pub fn with_notifications(self, ids: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for id in ids {
                state.notifications.push(Notification {
                    id: id.to_string(),
                    date: Some(Utc::now()),
                    notification_type: "MESSAGE_ADDED".to_string(),
                    ..Default::default()
                });
            }
        }
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn handle(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut state = self.state.lock().unwrap();
        let segments: Vec<&str> = request.segments.iter().map(String::as_str).collect();

        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["threads", thread, "messages"]) => {
                let body = match request.body.as_ref().and_then(|b| b.as_array()) {
                    Some(args) if args.len() == 1 && args[0].is_string() => {
                        args[0].as_str().unwrap_or_default().to_string()
                    }
                    _ => {
                        return Ok(ApiResponse::new(
                            StatusCode::BAD_REQUEST,
                            "missing message body",
                        ))
                    }
                };
                let text = Text {
                    id: format!("Qm{}", Uuid::new_v4().simple()),
                    thread: thread.to_string(),
                    body,
                    date: Some(Utc::now()),
                    author: "12D3KooWFake".to_string(),
                    ..Default::default()
                };
                state.texts.push(text.clone());
                ApiResponse::json_body(StatusCode::CREATED, &text)
            }
            ("GET", ["messages", id]) => match state.texts.iter().find(|t| t.id == *id) {
                Some(text) => ApiResponse::json_body(StatusCode::OK, text),
                None => Ok(not_found("block not found")),
            },
            ("GET", ["messages"]) => {
                let thread = match request.query_value("thread") {
                    Some(thread) if !thread.is_empty() => thread,
                    _ => DEFAULT_THREAD,
                };
                let limit: usize = match request.query_value("limit").map(str::parse::<usize>) {
                    Some(Ok(limit)) => limit,
                    _ => return Ok(ApiResponse::new(StatusCode::BAD_REQUEST, "invalid limit")),
                };

                let newest_first = state
                    .texts
                    .iter()
                    .rev()
                    .filter(|t| t.thread == thread && !state.ignored.contains(&t.id));
                let items: Vec<Text> = match request.query_value("offset") {
                    Some(offset) => newest_first
                        .skip_while(|t| t.id != offset)
                        .skip(1)
                        .take(limit)
                        .cloned()
                        .collect(),
                    None => newest_first.take(limit).cloned().collect(),
                };
                ApiResponse::json_body(StatusCode::OK, &TextList { items })
            }
            ("DELETE", ["blocks", id]) => {
                let thread = match state.texts.iter().find(|t| t.id == *id) {
                    Some(text) => text.thread.clone(),
                    None => return Ok(not_found("block not found")),
                };
                state.ignored.insert(id.to_string());
                let block = Block {
                    id: format!("Qm{}", Uuid::new_v4().simple()),
                    thread,
                    block_type: "IGNORE".to_string(),
                    date: Some(Utc::now()),
                    target: Some(id.to_string()),
                    ..Default::default()
                };
                ApiResponse::json_body(StatusCode::CREATED, &block)
            }
            ("GET", ["notifications"]) => {
                let mut items = state.notifications.clone();
                items.sort_by(|a, b| b.date.cmp(&a.date));
                ApiResponse::json_body(StatusCode::OK, &NotificationList { items })
            }
            ("POST", ["notifications", id, "read"]) => {
                let all = *id == "all";
                let mut found = false;
                for notification in state.notifications.iter_mut() {
                    if all || notification.id == *id {
                        notification.read = true;
                        found = true;
                    }
                }
                if found || all {
                    Ok(ApiResponse::new(StatusCode::OK, "ok"))
                } else {
                    Ok(not_found("notification not found"))
                }
            }
            ("POST", ["tokens"]) => {
                let store = match request.query_value("store") {
                    Some("true") => true,
                    Some("false") => false,
                    _ => return Ok(ApiResponse::new(StatusCode::BAD_REQUEST, "invalid store")),
                };
                let token = match request.query_value("token") {
                    Some(token) if !token.is_empty() => token.to_string(),
                    _ => generate_token(),
                };
                if store {
                    state.token_hashes.push(hash_token(&token));
                }
                Ok(ApiResponse::new(StatusCode::CREATED, token))
            }
            ("GET", ["tokens"]) => {
                ApiResponse::json_body(StatusCode::OK, &state.token_hashes)
            }
            ("GET", ["tokens", token]) => {
                if state.token_hashes.contains(&hash_token(token)) {
                    Ok(ApiResponse::empty(StatusCode::OK))
                } else {
                    Ok(ApiResponse::new(StatusCode::UNAUTHORIZED, "invalid token"))
                }
            }
            ("DELETE", ["tokens", token]) => {
                let hash = hash_token(token);
                let before = state.token_hashes.len();
                state.token_hashes.retain(|h| *h != hash);
                if state.token_hashes.len() < before {
                    Ok(ApiResponse::empty(StatusCode::NO_CONTENT))
                } else {
                    Ok(not_found("token not found"))
                }
            }
            _ => ApiResponse::json_body(
                StatusCode::NOT_FOUND,
                &json!({ "error": format!("no route for {} {}", request.method, request.path()) }),
            ),
        }
    }
}

#[async_trait]
impl HttpTransport for FakeCafe {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.handle(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

fn not_found(message: &str) -> ApiResponse {
    ApiResponse::new(StatusCode::NOT_FOUND, message.to_string())
}

/// 44 random bytes, base58 encoded
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill(&mut bytes[..]);
    bs58::encode(bytes).into_string()
}

/// Stored form of a token
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_decode_to_token_bytes() {
        let token = generate_token();
        let decoded = bs58::decode(&token).into_vec().unwrap();
        assert_eq!(decoded.len(), TOKEN_BYTES);
    }

    #[test]
    fn test_hash_is_not_the_token() {
        assert_ne!(hash_token("abc"), "abc");
        assert_eq!(hash_token("abc"), hash_token("abc"));
    }
}
