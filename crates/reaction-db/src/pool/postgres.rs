//! PostgreSQL pool for the reaction store

use std::time::Duration;

use reaction_common::DatabaseConfig;
use reaction_core::DomainError;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Fail a checkout well inside the HTTP request timeout
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
}

/// Open a pool against `config.url`
///
/// # Errors
/// Returns `DomainError::StorageUnavailable` if the server cannot be reached
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = pool_options(config)
        .connect(&config.url)
        .await
        .map_err(DomainError::storage)?;

    tracing::info!(
        max_connections = config.max_connections,
        "PostgreSQL pool ready"
    );
    Ok(pool)
}
