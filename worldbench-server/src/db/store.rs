//! World and fortune storage
//!
//! `WorldStore` is the seam between the benchmark operations and the
//! database driver. `PgStore` is the production implementation.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use super::error::{DbError, Outcome};
use crate::models::{Fortune, World};

const SELECT_WORLD: &str = "SELECT id, randomnumber FROM world WHERE id = $1";
const UPDATE_WORLD: &str = "UPDATE world SET randomnumber = $1 WHERE id = $2";
const SELECT_FORTUNES: &str = "SELECT id, message FROM fortune";

/// Point reads and writes used by the benchmark routes.
///
/// Every call is a single attempt; retry policy belongs to the caller.
#[async_trait]
pub trait WorldStore: Send + Sync {
    /// Fetch the world row with `id`. A missing row is `DbError::NotFound`.
    async fn fetch_world(&self, id: i32) -> Outcome<World>;

    /// Write `world.value` to the row with `world.id`.
    async fn update_world(&self, world: World) -> Outcome<()>;

    /// Fetch every persisted fortune, in database order.
    async fn fetch_fortunes(&self) -> Outcome<Vec<Fortune>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check out a connection for one operation.
    ///
    /// The guard goes back to the pool when dropped, on success and error alike.
    async fn acquire(&self) -> Outcome<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(DbError::Connection)
    }
}

#[async_trait]
impl WorldStore for PgStore {
    async fn fetch_world(&self, id: i32) -> Outcome<World> {
        let mut conn = self.acquire().await?;

        let (id, value) = sqlx::query_as::<_, (i32, i32)>(SELECT_WORLD)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(DbError::Query)?
            .ok_or(DbError::NotFound {
                resource: "world",
                id,
            })?;

        Ok(World { id, value })
    }

    async fn update_world(&self, world: World) -> Outcome<()> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query(UPDATE_WORLD)
            .bind(world.value)
            .bind(world.id)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Query)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "world",
                id: world.id,
            });
        }
        Ok(())
    }

    async fn fetch_fortunes(&self) -> Outcome<Vec<Fortune>> {
        let mut conn = self.acquire().await?;

        let rows = sqlx::query_as::<_, (i32, String)>(SELECT_FORTUNES)
            .fetch_all(&mut *conn)
            .await
            .map_err(DbError::Query)?;

        Ok(rows
            .into_iter()
            .map(|(id, message)| Fortune { id, message })
            .collect())
    }
}
