//! Appointment persistence
//!
//! Bookings share the SQLite pool with the chat store. Double bookings are
//! rejected by the unique (department, date, slot) constraint rather than a
//! read-then-write race.

use crate::appointments::models::{
    self, Appointment, SlotStatus, BOOKING_WINDOW_DAYS,
};
use crate::directory;
use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

/// Store for interview bookings
#[derive(Clone)]
pub struct AppointmentStore {
    pool: SqlitePool,
}

impl AppointmentStore {
    /// Wrap the shared pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Slot availability for a department on a date
    pub async fn slots_for(
        &self,
        department: &str,
        date: NaiveDate,
    ) -> Result<Vec<SlotStatus>, AppError> {
        if directory::find(department).is_none() {
            return Err(AppError::DepartmentNotFound(department.to_string()));
        }
        validate_date(date)?;

        let booked: Vec<String> = sqlx::query_scalar(
            "SELECT slot FROM appointments WHERE department = ? AND date = ?",
        )
        .bind(department)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch slots: {}", e)))?;

        Ok(models::all_slots()
            .map(|slot| SlotStatus {
                slot,
                available: !booked.iter().any(|b| b == slot),
            })
            .collect())
    }

    /// Book a slot; rejects unknown departments, out-of-window dates,
    /// unknown slots and double bookings
    pub async fn book(
        &self,
        department: &str,
        interviewer: &str,
        date: NaiveDate,
        slot: &str,
        visitor_name: &str,
    ) -> Result<Appointment, AppError> {
        if directory::find(department).is_none() {
            return Err(AppError::DepartmentNotFound(department.to_string()));
        }
        validate_date(date)?;
        if !models::is_known_slot(slot) {
            return Err(AppError::SlotUnavailable(slot.to_string()));
        }
        if visitor_name.trim().is_empty() {
            return Err(AppError::InvalidRequest("访客姓名不能为空".to_string()));
        }

        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            department: department.to_string(),
            interviewer: interviewer.to_string(),
            date,
            slot: slot.to_string(),
            visitor_name: visitor_name.trim().to_string(),
            created_at: Utc::now(),
        };

        let result = sqlx::query(
            "INSERT INTO appointments (id, department, interviewer, date, slot, visitor_name, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&appointment.id)
        .bind(&appointment.department)
        .bind(&appointment.interviewer)
        .bind(appointment.date)
        .bind(&appointment.slot)
        .bind(&appointment.visitor_name)
        .bind(appointment.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(
                    "Booked {} {} {} for {}",
                    appointment.department, appointment.date, appointment.slot,
                    appointment.visitor_name
                );
                Ok(appointment)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                AppError::SlotUnavailable(format!("{} {} {}", department, date, slot)),
            ),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "Failed to book appointment: {}",
                e
            ))),
        }
    }

    /// All bookings for a date, across departments
    pub async fn bookings_for(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, department, interviewer, date, slot, visitor_name, created_at FROM appointments WHERE date = ? ORDER BY slot ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to fetch bookings: {}", e)))?;

        Ok(appointments)
    }
}

fn validate_date(date: NaiveDate) -> Result<(), AppError> {
    let today = Utc::now().date_naive();
    if !models::in_booking_window(date, today) {
        return Err(AppError::InvalidRequest(format!(
            "预约日期须在今天起{}天内: {}",
            BOOKING_WINDOW_DAYS, date
        )));
    }
    Ok(())
}
