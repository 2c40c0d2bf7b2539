//! HTTP API handlers

pub mod analysis;
pub mod appointments;
pub mod chat;
pub mod directory;
pub mod faq;
pub mod pages;

use crate::ai::AiClient;
use crate::appointments::AppointmentStore;
use crate::chat::ChatStore;
use crate::config::Config;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// The AI request/response cycle client
    pub ai: Arc<AiClient>,
    /// Chat session store
    pub chat: ChatStore,
    /// Appointment store
    pub appointments: AppointmentStore,
    /// Loaded configuration
    pub config: Arc<Config>,
}
