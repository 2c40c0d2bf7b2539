//! HR Assistant Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod ai;
pub mod analysis;
pub mod api;
pub mod appointments;
pub mod chat;
pub mod config;
pub mod directory;
pub mod error;
pub mod faq;
pub mod store;
