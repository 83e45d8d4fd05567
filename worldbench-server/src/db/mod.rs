//! Database layer - connection pool, store, and benchmark operations
//!
//! # Design Principles
//!
//! - Each store call checks out its own pooled connection and returns it on drop
//! - Batches run sequentially and stop at the first failure
//! - Updates are individual statements, never wrapped in a transaction

pub mod error;
pub mod fortunes;
pub mod pool;
pub mod store;
pub mod worlds;

pub use error::{DbError, Outcome};
pub use fortunes::list_fortunes;
pub use pool::{create_pool, PoolConfig};
pub use store::{PgStore, WorldStore};
pub use worlds::{fetch_random_world, fetch_worlds, random_value, update_worlds};

#[cfg(test)]
pub(crate) mod testing;
