//! Database pool construction and the error taxonomy for data access
//!
//! Every store operation reports failures through [`DbError`]. Domain
//! conditions (absence, duplicates, zero-row writes) are explicit
//! variants so handlers can translate them to status codes without
//! inspecting SQL state.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Record already exists (unique constraint violation)
    #[error("{0}")]
    Duplicate(String),

    /// A write completed without affecting any rows
    #[error("{0}")]
    SaveFailed(String),
}

impl DbError {
    /// Create a not found error with resource context
    pub fn not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFound(format!("{} '{}' not found", resource_type, identifier))
    }

    /// Create a duplicate error with resource context
    pub fn duplicate(resource_type: &str, identifier: &str) -> Self {
        Self::Duplicate(format!("{} '{}' already exists", resource_type, identifier))
    }

    /// Create a zero-rows-affected error
    pub fn save_failed(message: impl Into<String>) -> Self {
        Self::SaveFailed(message.into())
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Build a connection pool from the database section of the configuration
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    if config.url.is_empty() {
        return Err(DbError::Config("DATABASE_URL not set".to_string()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Camp", "atl2024");
        assert_eq!(err.to_string(), "Camp 'atl2024' not found");
    }

    #[test]
    fn test_duplicate_message() {
        let err = DbError::duplicate("Camp", "atl2024");
        assert_eq!(err.to_string(), "Camp 'atl2024' already exists");
    }
}
