//! Database endpoints: single query, multiple queries, updates

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::db::{fetch_random_world, fetch_worlds, update_worlds};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{QueryCount, World};

/// GET /db - one random row
async fn single_query(State(state): State<Arc<AppState>>) -> Result<Json<World>, ApiError> {
    let mut rng = StdRng::from_entropy();
    let world = fetch_random_world(state.store.as_ref(), &mut rng).await?;
    Ok(Json(world))
}

/// GET /queries?queries=N - N random rows
async fn multiple_queries(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<World>>, ApiError> {
    let count = QueryCount::from_pairs(&pairs);
    let mut rng = StdRng::from_entropy();
    let worlds = fetch_worlds(state.store.as_ref(), count, &mut rng).await?;
    Ok(Json(worlds))
}

/// GET /updates?queries=N - N random rows with new values written back
async fn updates(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<World>>, ApiError> {
    let count = QueryCount::from_pairs(&pairs);
    let mut rng = StdRng::from_entropy();
    let worlds = update_worlds(state.store.as_ref(), count, &mut rng).await?;
    Ok(Json(worlds))
}

/// World routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/db", get(single_query))
        .route("/queries", get(multiple_queries))
        .route("/updates", get(updates))
}
