//! Applicant analysis API

use crate::analysis::{self, ApplicantReport};
use crate::api::AppState;
use crate::error::AppError;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

/// Request body for `POST /api/analyze`
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// The applicant's self-introduction
    pub introduction: String,
}

/// Analyze an applicant's self-introduction locally (no AI call)
pub async fn analyze(
    State(_state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApplicantReport>, AppError> {
    if request.introduction.trim().is_empty() {
        return Err(AppError::InvalidRequest("自我介绍不能为空".to_string()));
    }
    Ok(Json(analysis::analyze_applicant(&request.introduction)))
}
