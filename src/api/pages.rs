//! Window shell pages API
//!
//! The window shell consumes a list of named pages and shows one by name;
//! the video page additionally carries the local media file path.

use crate::api::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// One named page of the shell
#[derive(Serialize)]
pub struct PageInfo {
    /// Display name, used by the shell's "show page by name" call
    pub name: &'static str,
    /// Page kind the shell maps to a widget
    pub kind: &'static str,
    /// Local media file path, for the video page only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_path: Option<String>,
}

/// List the shell's pages in display order
pub async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageInfo>> {
    Json(vec![
        PageInfo {
            name: "智能HR助手",
            kind: "chat",
            media_path: None,
        },
        PageInfo {
            name: "常见问题",
            kind: "faq",
            media_path: None,
        },
        PageInfo {
            name: "公司导航",
            kind: "map",
            media_path: None,
        },
        PageInfo {
            name: "面试预约",
            kind: "appointment",
            media_path: None,
        },
        PageInfo {
            name: "宣传视频",
            kind: "video",
            media_path: Some(state.config.media.intro_video_path.clone()),
        },
    ])
}
