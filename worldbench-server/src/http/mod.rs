//! HTTP server layer
//!
//! Axum server with:
//! - Fixed `Server` header on every response
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text 400 responses for failed database work

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, SERVER_NAME};
