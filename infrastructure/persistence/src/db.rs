use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))
}

/// Database handle connected once the HTTP listener is bound.
///
/// The gateway keeps the handle alive for the server's lifetime and exposes it
/// to the route groups that persist users and messages.
pub struct Database {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Connects on first call; later calls return the same pool.
    pub async fn connect(&self) -> Result<&PgPool, DatabaseError> {
        self.pool
            .get_or_try_init(|| create_postgres_pool(&self.config))
            .await
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_pool_settings() {
        let config = DatabaseConfig::new("postgres://localhost/chat".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn should_not_expose_pool_before_connecting() {
        let database = Database::new(DatabaseConfig::new(
            "postgres://localhost/chat".to_string(),
        ));

        assert!(database.pool().is_none());
    }

    #[tokio::test]
    async fn should_fail_to_connect_with_malformed_url() {
        let database = Database::new(DatabaseConfig::new("not a url".to_string()));

        let result = database.connect().await;

        assert!(matches!(result, Err(DatabaseError::ConnectionError(_))));
        assert!(database.pool().is_none());
    }
}
