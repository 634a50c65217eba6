//! Chat session state.
//!
//! The transcript and the latest query result are owned by one explicit
//! state object with update methods; nothing here is module-level or
//! hidden. Each query's result supersedes the previous one.

use argo_core::query::QueryResult;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a chat message.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the chat transcript. Assistant messages may carry the
/// query result they describe.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub data: Option<QueryResult>,
}

/// Where the UI points the map before any query has run, when no
/// geolocation source is available or it fails.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lon: f64,
}

impl Default for UserLocation {
    fn default() -> Self {
        UserLocation { lat: 10.0, lon: 75.0 }
    }
}

/// The application-owned chat state: transcript plus the latest results.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Session {
    messages: Vec<ChatMessage>,
    latest: Option<QueryResult>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Append a user message to the transcript.
    pub fn push_user(&mut self, text: &str) -> &ChatMessage {
        self.push(Role::User, text, None)
    }

    /// Append an assistant response and make its result the session's
    /// latest, superseding any previous result.
    pub fn record_response(&mut self, text: &str, result: QueryResult) -> &ChatMessage {
        self.latest = Some(result.clone());
        self.push(Role::Assistant, text, Some(result))
    }

    fn push(&mut self, role: Role, text: &str, data: Option<QueryResult>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            text: text.to_string(),
            timestamp: Utc::now().naive_utc(),
            data,
        });
        self.messages.last().expect("just pushed")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The result of the most recent query, if any.
    pub fn latest_results(&self) -> Option<&QueryResult> {
        self.latest.as_ref()
    }
}
