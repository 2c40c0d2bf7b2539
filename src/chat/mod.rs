//! Chat sessions and message history

pub mod models;
pub mod store;

pub use models::{ChatMessage, MessageRole, Session};
pub use store::ChatStore;
