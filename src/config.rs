//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Credentials are never compiled in: the AI API key
//! only ever comes from the environment.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Upstream AI service configuration
    pub ai: AiConfig,
    /// Static media configuration
    pub media: MediaConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
}

/// Upstream AI service configuration
///
/// Base URL, key and model used to be hardcoded in the client; they are
/// configuration now, so the three divergent copies of the original flow
/// collapse into one component.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of the chat-completion API (without the `/chat/completions` suffix)
    pub base_url: String,
    /// Bearer token for the API; empty means "not configured"
    pub api_key: String,
    /// Model name sent in the request body
    pub model: String,
    /// Bounded wait for a reply, in seconds
    pub timeout_secs: u64,
}

/// Static media configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Local file path handed to the video playback collaborator
    pub intro_video_path: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                path: env::var("DATABASE_PATH").unwrap_or_else(|_| {
                    if let Some(home) = env::var_os("HOME") {
                        format!("{}/.hr-assistant/chat.db", home.to_string_lossy())
                    } else {
                        ".hr-assistant/chat.db".to_string()
                    }
                }),
            },
            ai: AiConfig::from_env(),
            media: MediaConfig {
                intro_video_path: env::var("INTRO_VIDEO_PATH")
                    .unwrap_or_else(|_| "assets/intro.mp4".to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl AiConfig {
    /// Load AI configuration from environment variables
    ///
    /// The API key has no default on purpose; requests fail with a clear
    /// error until `AI_API_KEY` is set.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("AI_BASE_URL")
                .unwrap_or_else(|_| "https://ark.cn-beijing.volces.com/api/v3".to_string()),
            api_key: env::var("AI_API_KEY").unwrap_or_default(),
            model: env::var("AI_MODEL").unwrap_or_else(|_| "deepseek-v3-1-250821".to_string()),
            timeout_secs: env::var("AI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(15),
        }
    }
}
