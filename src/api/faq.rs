//! FAQ API

use crate::api::AppState;
use crate::error::AppError;
use crate::faq::{self, FaqEntry};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/faq`
#[derive(Deserialize)]
pub struct FaqQuery {
    /// Category filter; "全部" or absent means all categories
    #[serde(default)]
    pub category: Option<String>,
    /// Keyword filter over question and answer text
    #[serde(default)]
    pub q: Option<String>,
}

/// Response body for `GET /api/faq`
#[derive(Serialize)]
pub struct FaqResponse {
    /// Available categories
    pub categories: Vec<&'static str>,
    /// Entries matching the filters
    pub entries: Vec<&'static FaqEntry>,
}

/// List FAQ entries with optional category and keyword filters
pub async fn list_faq(
    State(_state): State<AppState>,
    Query(query): Query<FaqQuery>,
) -> Result<Json<FaqResponse>, AppError> {
    let entries = faq::search(query.category.as_deref(), query.q.as_deref());
    Ok(Json(FaqResponse {
        categories: faq::categories(),
        entries,
    }))
}
