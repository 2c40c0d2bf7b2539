//! HR Assistant Backend
//!
//! A REST API server for the company HR assistant: AI-backed chat with
//! advisory classification, FAQ browsing, the department map, interview
//! appointment booking, and local applicant analysis.

mod ai;
mod analysis;
mod api;
mod appointments;
mod chat;
mod config;
mod directory;
mod error;
mod faq;
mod store;

use ai::AiClient;
use api::AppState;
use appointments::AppointmentStore;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chat::ChatStore;
use config::Config;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

#[derive(Serialize)]
struct HelloResponse {
    message: String,
    status: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    ai_connected: bool,
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!(
        server = %config.server_addr(),
        db = %config.database.path,
        model = %config.ai.model,
        "Configuration loaded"
    );
    if config.ai.api_key.is_empty() {
        tracing::warn!("AI_API_KEY is not set; chat requests will degrade to local analysis only after failing");
    }

    // Open the shared SQLite pool and build application state
    let pool = store::open(&config.database.path).await?;
    let state = AppState {
        ai: Arc::new(AiClient::new(config.ai.clone())),
        chat: ChatStore::new(pool.clone()),
        appointments: AppointmentStore::new(pool),
        config: Arc::new(config.clone()),
    };

    // Build our application with routes
    let app = Router::new()
        // Health check and hello world
        .route("/", get(hello_world))
        .route("/api/health", get(health_check))
        // Chat: the AI request/response cycle
        .route("/api/chat", post(api::chat::send_chat))
        .route("/api/sessions", get(api::chat::list_sessions))
        .route(
            "/api/sessions/:id/messages",
            get(api::chat::get_messages),
        )
        .route(
            "/api/sessions/:id",
            axum::routing::delete(api::chat::delete_session),
        )
        // Local applicant analysis
        .route("/api/analyze", post(api::analysis::analyze))
        // FAQ browser
        .route("/api/faq", get(api::faq::list_faq))
        // Department directory and map routes
        .route("/api/departments", get(api::directory::list_departments))
        .route("/api/departments/:name", get(api::directory::get_department))
        .route(
            "/api/departments/:name/route",
            get(api::directory::get_route),
        )
        // Appointment booking
        .route("/api/appointments/slots", get(api::appointments::get_slots))
        .route("/api/appointments", post(api::appointments::book))
        // Window shell pages
        .route("/api/pages", get(api::pages::list_pages))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    // Bind to address from config
    let addr: SocketAddr = state
        .config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "青蓝公司HR智能问答系统API已就绪".to_string(),
        status: "ok".to_string(),
    })
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_connected: state.ai.is_connected(),
    })
}
