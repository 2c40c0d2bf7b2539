//! Chat persistence
//!
//! Session and message operations over the shared SQLite pool. The message
//! log is append-only; clearing a session deletes it and cascades to its
//! messages.

use crate::chat::models::{ChatMessage, MessageRole, Session};
use crate::error::AppError;
use sqlx::SqlitePool;
use tracing::debug;

/// Store for sessions and their message logs
#[derive(Clone)]
pub struct ChatStore {
    pool: SqlitePool,
}

impl ChatStore {
    /// Wrap the shared pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all sessions, ordered by most recent activity
    pub async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        let sessions = sqlx::query_as::<_, Session>(
            "SELECT id, title, created_at, updated_at FROM sessions ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch sessions: {}", e)))?;

        Ok(sessions)
    }

    /// Get a session by ID
    pub async fn get_session(&self, id: &str) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, title, created_at, updated_at FROM sessions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch session: {}", e)))?;

        Ok(session)
    }

    /// Create a new session
    pub async fn create_session(&self, session: &Session) -> Result<(), AppError> {
        sqlx::query("INSERT INTO sessions (id, title, created_at, updated_at) VALUES (?, ?, ?, ?)")
            .bind(&session.id)
            .bind(&session.title)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create session: {}", e)))?;

        debug!("Created session: {}", session.id);
        Ok(())
    }

    /// Update a session's last-activity timestamp
    pub async fn touch_session(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE sessions SET updated_at = ? WHERE id = ?")
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to touch session: {}", e)))?;

        Ok(())
    }

    /// Delete a session (cascades to its messages)
    pub async fn delete_session(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to delete session: {}", e)))?;

        debug!("Deleted session: {}", id);
        Ok(())
    }

    /// Get all messages of a session, in creation order
    pub async fn messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, AppError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            "SELECT id, session_id, role, content, created_at FROM messages WHERE session_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch messages: {}", e)))?;

        Ok(messages)
    }

    /// Append a message to a session's log
    pub async fn append_message(&self, message: &ChatMessage) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO messages (id, session_id, role, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&message.id)
        .bind(&message.session_id)
        .bind(&message.role)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to append message: {}", e)))?;

        self.touch_session(&message.session_id).await?;

        debug!(
            "Appended {} message {} to session {}",
            message.role, message.id, message.session_id
        );
        Ok(())
    }

    /// Render the last `limit` user/assistant messages into the prompt's
    /// conversation-history block. System notices are skipped.
    pub async fn render_history(&self, session_id: &str, limit: usize) -> Result<String, AppError> {
        let messages = self.messages(session_id).await?;

        let lines: Vec<String> = messages
            .iter()
            .filter(|m| m.role_enum() != MessageRole::System)
            .map(|m| {
                let speaker = match m.role_enum() {
                    MessageRole::User => "访客",
                    _ => "助手",
                };
                format!("{}: {}", speaker, m.content)
            })
            .collect();

        let start = lines.len().saturating_sub(limit);
        Ok(lines[start..].join("\n"))
    }
}
