//! Department directory API
//!
//! Serves the fixed roster and the map collaborator's name-to-polyline
//! lookup.

use crate::api::AppState;
use crate::directory::{self, Department, MapRoute};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

/// List all departments
pub async fn list_departments(
    State(_state): State<AppState>,
) -> Json<&'static [Department]> {
    Json(directory::all())
}

/// Get one department by name
pub async fn get_department(
    State(_state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<&'static Department>, AppError> {
    directory::find(&name)
        .map(Json)
        .ok_or(AppError::DepartmentNotFound(name))
}

/// Get the map route for a department
pub async fn get_route(
    State(_state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MapRoute>, AppError> {
    directory::find(&name)
        .map(|d| Json(d.map_route()))
        .ok_or(AppError::DepartmentNotFound(name))
}
