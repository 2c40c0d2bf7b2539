//! The AI request/response cycle
//!
//! Formats a prompt plus user text into a chat-completion request, sends it
//! over HTTPS, and classifies the textual reply into a discrete advisory
//! outcome. State machine: `Idle -> Pending -> Idle` on success, error or
//! timeout; only one request may be in flight per client instance.

pub mod classifier;
pub mod client;
pub mod prompts;
pub mod types;

pub use classifier::{AnalysisResult, FitnessLevel, KeywordClassifier, ReplyClassifier};
pub use client::{AiClient, FALLBACK_REPLY};
pub use prompts::PromptKind;
