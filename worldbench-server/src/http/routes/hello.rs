//! Plaintext and JSON serialization endpoints

use axum::http::header;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON serialization response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /plaintext
async fn plaintext() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "Hello, world!")
}

/// GET /json
async fn json() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, World!",
    })
}

/// Stateless routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/plaintext", get(plaintext))
        .route("/json", get(json))
}
