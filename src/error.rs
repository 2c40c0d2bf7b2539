//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! Transport failures each carry a distinct user-facing message, and every error
//! body reports whether upstream connectivity is believed to be intact.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream refused the TCP connection
    #[error("连接被拒绝，请检查网络设置")]
    ConnectionRefused,

    /// DNS resolution of the upstream host failed
    #[error("无法找到服务器，请检查网络连接")]
    HostNotFound,

    /// TLS certificate validation failed; the connection was rejected, not trusted
    #[error("不安全的连接已被拒绝，请检查服务器证书")]
    InsecureConnectionRejected,

    /// The bounded wait for the AI reply elapsed
    #[error("请求超时，请检查网络连接")]
    RequestTimeout,

    /// Any other transport-level failure
    #[error("网络请求失败: {0}")]
    Transport(String),

    /// A request was made while another one is still in flight
    #[error("请求正在进行中，请稍候再试")]
    RequestPending,

    /// The AI API key is not configured
    #[error("AI API key 未配置，请设置 AI_API_KEY 环境变量")]
    MissingApiKey,

    /// Session with the given ID was not found
    #[error("会话不存在: {0}")]
    SessionNotFound(String),

    /// Department with the given name was not found
    #[error("部门不存在: {0}")]
    DepartmentNotFound(String),

    /// The requested interview slot is already taken or unknown
    #[error("该时间段无法预约: {0}")]
    SlotUnavailable(String),

    /// Request payload failed validation
    #[error("无效请求: {0}")]
    InvalidRequest(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error means upstream connectivity is currently broken.
    ///
    /// Transport-class failures flip the client's connectivity flag; everything
    /// else leaves it untouched.
    pub fn connectivity_lost(&self) -> bool {
        matches!(
            self,
            AppError::ConnectionRefused
                | AppError::HostNotFound
                | AppError::InsecureConnectionRejected
                | AppError::RequestTimeout
                | AppError::Transport(_)
        )
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConnectionRefused
            | AppError::HostNotFound
            | AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::InsecureConnectionRejected => StatusCode::BAD_GATEWAY,
            AppError::RequestTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::RequestPending => StatusCode::TOO_MANY_REQUESTS,
            AppError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SessionNotFound(_) | AppError::DepartmentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::SlotUnavailable(_) => StatusCode::CONFLICT,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
            "connected": !self.connectivity_lost(),
        }));

        (status, body).into_response()
    }
}
