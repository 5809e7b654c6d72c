use std::future::Future;
use std::time::Duration;

use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("database.invalid_url")]
    InvalidUrl,
    #[error("database.close_timeout")]
    CloseTimedOut,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Deadline applied to every individual statement.
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }
}

/// Creates a PostgreSQL connection pool without opening any connection.
///
/// Only the URL is checked here; connectivity problems surface on first use.
pub fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.connection_string)
        .map_err(|e| {
            tracing::error!(error = %e, "invalid database connection string");
            DatabaseError::InvalidUrl
        })
}

/// A pool plus the per-statement deadline it was configured with.
#[derive(Clone, Debug)]
pub struct DatabaseHandle {
    pool: PgPool,
    query_timeout: Duration,
}

impl DatabaseHandle {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs one statement under the configured deadline, classifying failures.
    pub async fn bounded<T, F>(&self, query: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(classify),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "database query timed out"
                );
                Err(RepositoryError::Unavailable)
            }
        }
    }

    pub(crate) fn into_pool(self) -> PgPool {
        self.pool
    }
}

/// Connection-level failures are operational; everything else is a fault.
fn classify(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            tracing::warn!(error = %err, "database unreachable");
            RepositoryError::Unavailable
        }
        other => {
            tracing::error!(error = %other, "database query failed");
            RepositoryError::DatabaseError
        }
    }
}
