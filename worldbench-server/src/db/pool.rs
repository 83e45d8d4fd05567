//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Requests beyond
//! `max_connections` wait in the pool's queue for up to `acquire_timeout`.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Floor for the default pool size on small machines.
const MIN_DEFAULT_CONNECTIONS: u32 = 4;

/// Default time a request waits for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool settings
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Upper bound on concurrent database connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// How long an operation waits for a connection before failing
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: default_max_connections(),
            min_connections: 0,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Default pool size: four connections per CPU, never fewer than four.
pub fn default_max_connections() -> u32 {
    let cpus = u32::try_from(num_cpus::get()).unwrap_or(1);
    cpus.saturating_mul(4).max(MIN_DEFAULT_CONNECTIONS)
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&PoolConfig::new("postgres://localhost/hello_world")).await?;
/// ```
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}
