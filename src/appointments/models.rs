//! Appointment data models
//!
//! Interview bookings use a fixed half-hour slot grid (morning and
//! afternoon) and a 30-day booking window starting today.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Morning interview slots
pub const MORNING_SLOTS: [&str; 8] = [
    "08:00-08:30",
    "08:30-09:00",
    "09:00-09:30",
    "09:30-10:00",
    "10:00-10:30",
    "10:30-11:00",
    "11:00-11:30",
    "11:30-12:00",
];

/// Afternoon interview slots
pub const AFTERNOON_SLOTS: [&str; 8] = [
    "14:00-14:30",
    "14:30-15:00",
    "15:00-15:30",
    "15:30-16:00",
    "16:00-16:30",
    "16:30-17:00",
    "17:00-17:30",
    "17:30-18:00",
];

/// How many days ahead a booking may be made
pub const BOOKING_WINDOW_DAYS: i64 = 30;

/// All slots of a day, morning first
pub fn all_slots() -> impl Iterator<Item = &'static str> {
    MORNING_SLOTS.into_iter().chain(AFTERNOON_SLOTS)
}

/// Whether `slot` is one of the fixed grid slots
pub fn is_known_slot(slot: &str) -> bool {
    all_slots().any(|s| s == slot)
}

/// Whether `date` falls inside the booking window relative to `today`
pub fn in_booking_window(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date <= today + chrono::Duration::days(BOOKING_WINDOW_DAYS)
}

/// A confirmed interview booking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique identifier for the booking
    pub id: String,
    /// Department the interview takes place in
    pub department: String,
    /// Interviewer (department head, captain or vice captain)
    pub interviewer: String,
    /// Interview date
    pub date: NaiveDate,
    /// Slot label, e.g. "09:00-09:30"
    pub slot: String,
    /// Name of the visitor
    pub visitor_name: String,
    /// Booking time
    pub created_at: DateTime<Utc>,
}

/// Availability of one slot on a given date
#[derive(Debug, Clone, Serialize)]
pub struct SlotStatus {
    /// Slot label
    pub slot: &'static str,
    /// False once the slot is booked
    pub available: bool,
}
