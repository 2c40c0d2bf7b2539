//! Chat data models
//!
//! Sessions group an ordered, append-only sequence of messages. Messages are
//! never mutated after creation; timestamps persist as ISO-8601 text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the visitor
    User,
    /// Message from the AI assistant
    Assistant,
    /// System notice injected by the application
    System,
}

impl MessageRole {
    /// Convert the role to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

impl From<&str> for MessageRole {
    fn from(s: &str) -> Self {
        match s {
            "assistant" => MessageRole::Assistant,
            "system" => MessageRole::System,
            _ => MessageRole::User,
        }
    }
}

/// A chat session
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique identifier for the session
    pub id: String,
    /// Title derived from the first message
    pub title: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last activity time
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    pub fn new(id: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A single message in a session
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// Unique identifier for the message
    pub id: String,
    /// Session this message belongs to
    pub session_id: String,
    /// Role tag, stored as "user", "assistant" or "system"
    pub role: String,
    /// Message text
    pub content: String,
    /// Creation time, persisted as RFC 3339 text
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message
    pub fn new(id: String, session_id: String, role: MessageRole, content: String) -> Self {
        Self {
            id,
            session_id,
            role: role.as_str().to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    /// Get the message role as enum
    pub fn role_enum(&self) -> MessageRole {
        MessageRole::from(self.role.as_str())
    }
}
