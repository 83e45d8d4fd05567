//! API error type with IntoResponse
//!
//! Database failures become `400 Bad Request` with the error text as body.
//! Nothing from a half-finished batch is ever serialized.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Connection or query failure (400, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Database(e) => {
                tracing::error!(kind = e.kind(), error = %e, "database operation failed");
                (StatusCode::BAD_REQUEST, format!("Error: {}", e))
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
