//! Fortunes endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::db::list_fortunes;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::render::FortunesPage;

/// GET /fortunes - sorted, escaped HTML table
async fn fortunes(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let fortunes = list_fortunes(state.store.as_ref()).await?;
    let html = FortunesPage::new(&fortunes).render();
    Ok(([(header::CONTENT_TYPE, "text/html; charset=UTF-8")], html))
}

/// Fortune routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fortunes", get(fortunes))
}
