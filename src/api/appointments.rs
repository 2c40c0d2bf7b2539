//! Appointment API
//!
//! The calendar collaborator asks for a date's slot list; a booking claims
//! one slot with a department, interviewer and visitor name.

use crate::api::AppState;
use crate::appointments::{Appointment, SlotStatus};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

/// Query parameters for `GET /api/appointments/slots`
#[derive(Deserialize)]
pub struct SlotsQuery {
    /// Department to book with
    pub department: String,
    /// Interview date (ISO, e.g. 2026-09-01)
    pub date: NaiveDate,
}

/// Request body for `POST /api/appointments`
#[derive(Deserialize)]
pub struct BookRequest {
    /// Department to book with
    pub department: String,
    /// Chosen interviewer
    pub interviewer: String,
    /// Interview date
    pub date: NaiveDate,
    /// Slot label from the slot list
    pub slot: String,
    /// Name of the visitor
    pub visitor_name: String,
}

/// Slot availability for a department on a date
pub async fn get_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<SlotStatus>>, AppError> {
    let slots = state
        .appointments
        .slots_for(&query.department, query.date)
        .await?;
    Ok(Json(slots))
}

/// Book an interview slot
pub async fn book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .appointments
        .book(
            &request.department,
            &request.interviewer,
            request.date,
            &request.slot,
            &request.visitor_name,
        )
        .await?;

    info!(
        department = %appointment.department,
        date = %appointment.date,
        slot = %appointment.slot,
        "appointment booked"
    );

    Ok(Json(appointment))
}
