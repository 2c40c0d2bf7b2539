//! Chat API
//!
//! Runs the full AI cycle for one user message: ensure the session exists,
//! append the user message, call the AI client, append the assistant reply,
//! and return the classified outcome. When the AI service is unreachable
//! the endpoint degrades to the local applicant analysis instead of failing
//! the request; a duplicate call while one is pending is surfaced as-is.

use crate::ai::{AnalysisResult, FitnessLevel, PromptKind};
use crate::analysis;
use crate::api::AppState;
use crate::chat::{ChatMessage, MessageRole, Session};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const HISTORY_LIMIT: usize = 20;
const TITLE_MAX_CHARS: usize = 24;

/// Request body for `POST /api/chat`
#[derive(Deserialize)]
pub struct ChatRequest {
    /// The visitor's message
    pub message: String,
    /// Session to continue; a new one is created when absent
    #[serde(default)]
    pub session_id: Option<String>,
    /// Advisory persona; defaults to the HR chat assistant
    #[serde(default)]
    pub kind: PromptKind,
}

/// Response body for `POST /api/chat`
#[derive(Serialize)]
pub struct ChatResponse {
    /// Session the exchange belongs to
    pub session_id: String,
    /// Assistant reply text
    pub reply: String,
    /// Advisory tier derived from the reply
    pub fitness_level: FitnessLevel,
    /// Recommended department, if any
    pub recommended_department: Option<String>,
    /// Whether a human should take over
    pub needs_human_handoff: bool,
    /// Whether the upstream AI service was reachable
    pub connected: bool,
    /// True when the reply came from the local fallback analysis
    pub degraded: bool,
}

/// Handle one chat exchange
pub async fn send_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::InvalidRequest("消息不能为空".to_string()));
    }

    let session_id = ensure_session(&state, request.session_id, &message).await?;

    info!(
        session_id = %session_id,
        message_len = message.len(),
        "chat request received"
    );

    let user_message = ChatMessage::new(
        uuid::Uuid::new_v4().to_string(),
        session_id.clone(),
        MessageRole::User,
        message.clone(),
    );
    state.chat.append_message(&user_message).await?;

    let history = state.chat.render_history(&session_id, HISTORY_LIMIT).await?;
    let history = if history.is_empty() {
        None
    } else {
        Some(history)
    };

    let outcome = state
        .ai
        .send_chat(request.kind, &message, history.as_deref())
        .await;

    let (result, degraded) = match outcome {
        Ok(result) => (result, false),
        Err(e) if e.connectivity_lost() => {
            warn!(session_id = %session_id, error = %e, "AI service unreachable, falling back to local analysis");
            (degraded_result(&message, &e), true)
        }
        // RequestPending and configuration errors propagate unchanged; the
        // in-flight exchange must not be disturbed.
        Err(e) => return Err(e),
    };

    let assistant_message = ChatMessage::new(
        uuid::Uuid::new_v4().to_string(),
        session_id.clone(),
        MessageRole::Assistant,
        result.reply.clone(),
    );
    state.chat.append_message(&assistant_message).await?;

    Ok(Json(ChatResponse {
        session_id,
        reply: result.reply,
        fitness_level: result.fitness_level,
        recommended_department: result.recommended_department,
        needs_human_handoff: result.needs_human_handoff,
        connected: state.ai.is_connected(),
        degraded,
    }))
}

async fn ensure_session(
    state: &AppState,
    session_id: Option<String>,
    message: &str,
) -> Result<String, AppError> {
    let session_id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    if state.chat.get_session(&session_id).await?.is_none() {
        let title: String = message.chars().take(TITLE_MAX_CHARS).collect();
        let session = Session::new(session_id.clone(), title);
        state.chat.create_session(&session).await?;
    }

    Ok(session_id)
}

fn degraded_result(message: &str, error: &AppError) -> AnalysisResult {
    let report = analysis::analyze_applicant(message);
    let reply = format!(
        "抱歉，AI服务暂时不可用（{}），为您提供基础HR建议：\n\n{}",
        error,
        report.advisory_text()
    );
    AnalysisResult {
        reply,
        fitness_level: report.fitness_level,
        recommended_department: Some(report.recommended_department),
        needs_human_handoff: report.needs_human_consult,
    }
}

/// List all sessions, most recently active first
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Session>>, AppError> {
    Ok(Json(state.chat.list_sessions().await?))
}

/// Get the message log of a session
pub async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    if state.chat.get_session(&session_id).await?.is_none() {
        return Err(AppError::SessionNotFound(session_id));
    }
    Ok(Json(state.chat.messages(&session_id).await?))
}

/// Clear a session and its messages
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.chat.get_session(&session_id).await?.is_none() {
        return Err(AppError::SessionNotFound(session_id));
    }
    state.chat.delete_session(&session_id).await?;
    Ok(Json(serde_json::json!({ "deleted": session_id })))
}
