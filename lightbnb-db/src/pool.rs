//! Database connection pool management
//!
//! The pool is built once at startup and handed to each repository by
//! reference. Nothing in this crate keeps a process-wide pool.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::{DbConfig, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use crate::error::Result;
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/lightbnb").await?;
/// ```
pub async fn create_pool(database_url: &str) -> std::result::Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        database_url,
        DEFAULT_MAX_CONNECTIONS,
        Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
    )
    .await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a caller waits for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Handle to the LightBnB store.
///
/// Cheap to clone; clones share the same pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect using the given configuration.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = create_pool_with_options(
            &config.database_url,
            config.max_connections,
            config.acquire_timeout(),
        )
        .await?;

        info!(
            max_connections = config.max_connections,
            "Database connection pool established"
        );

        Ok(Self { pool })
    }

    /// Wrap a pool built elsewhere.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}
