//! Database Connection Management
//!
//! Utilities for creating and preparing the PostgreSQL connection pool.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use super::config::DatabaseConfig;

/// Build connection options from the discrete `DB_*` settings
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database);

    if config.logging {
        options
    } else {
        options.disable_statement_logging()
    }
}

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable or rejects the credentials.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(connect_options(config))
        .await
}

/// Bring the schema in line with the entity definitions when synchronisation is enabled
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails to apply.
pub async fn synchronize_schema(pool: &PgPool, config: &DatabaseConfig) -> Result<(), sqlx::migrate::MigrateError> {
    if !config.synchronize {
        tracing::debug!("Schema synchronization disabled");
        return Ok(());
    }

    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema synchronized");
    Ok(())
}
