use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from connecting to the store database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the store database pool from `DATABASE_URL`, sized by `config`
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let url = database_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect(&url)
        .await?;

    info!(
        "Created database pool (max_connections={}, timeout={}s)",
        config.max_connections, config.connection_timeout
    );
    Ok(pool)
}

fn database_url() -> Result<String, DatabaseError> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))
}
