//! Interview appointment booking

pub mod models;
pub mod store;

pub use models::{Appointment, SlotStatus};
pub use store::AppointmentStore;
