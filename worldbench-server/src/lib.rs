//! worldbench-server: database benchmark HTTP server
//!
//! Serves the six fixed benchmark routes (plaintext, json, db, queries,
//! fortunes, updates) over a PostgreSQL pool.

pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use db::{DbError, Outcome, PgStore, PoolConfig, WorldStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
