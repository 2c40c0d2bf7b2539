//! SQLite pool setup and migrations
//!
//! One pool is opened at startup and shared by the chat and appointment
//! stores. Migrations are embedded in the binary and executed statement by
//! statement on every start; all statements are idempotent.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Open the SQLite pool at `db_path` and run migrations
pub async fn open(db_path: &str) -> Result<SqlitePool, AppError> {
    // Ensure parent directory exists
    if let Some(parent) = PathBuf::from(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
            })?;
        }
    }

    let connection_string = if db_path.starts_with("sqlite:") {
        db_path.to_string()
    } else {
        format!("sqlite:{}", db_path)
    };

    let options = SqliteConnectOptions::from_str(&connection_string)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e)))?;

    info!("Connected to SQLite database at: {}", db_path);

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    let migration_sql = include_str!("../migrations/001_create_tables.sql");

    // Strip comment lines and inline comments, then split on semicolons.
    let mut cleaned_sql = String::new();
    for line in migration_sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let without_comments = if let Some(comment_pos) = trimmed.find("--") {
            &trimmed[..comment_pos]
        } else {
            trimmed
        };
        cleaned_sql.push_str(without_comments.trim());
        cleaned_sql.push(' ');
    }

    let statements: Vec<&str> = cleaned_sql
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    for statement in statements {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Migration failed: {} - Statement: {}",
                e,
                statement.chars().take(100).collect::<String>()
            ))
        })?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}
