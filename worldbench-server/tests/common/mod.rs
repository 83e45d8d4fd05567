//! Shared test helpers for route tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use worldbench_server::models::{Fortune, World, WORLD_ROWS};
use worldbench_server::{build_router, AppState, DbError, Outcome, WorldStore};

/// How the in-memory store should behave.
#[derive(Clone, Copy, Default)]
pub enum Mode {
    #[default]
    Healthy,
    /// Every call fails to get a connection
    Unreachable,
    /// The nth world fetch (1-based) fails
    FailFetchAt(usize),
}

pub struct MemoryStore {
    worlds: Mutex<HashMap<i32, i32>>,
    fortunes: Vec<Fortune>,
    mode: Mode,
    fetches: Mutex<usize>,
}

impl MemoryStore {
    pub fn new(mode: Mode, fortunes: Vec<Fortune>) -> Self {
        Self {
            worlds: Mutex::new((1..=WORLD_ROWS).map(|id| (id, id)).collect()),
            fortunes,
            mode,
            fetches: Mutex::new(0),
        }
    }

    pub fn value_of(&self, id: i32) -> i32 {
        self.worlds.lock().unwrap()[&id]
    }

    fn connect(&self) -> Outcome<()> {
        match self.mode {
            Mode::Unreachable => Err(DbError::Connection(sqlx::Error::PoolTimedOut)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl WorldStore for MemoryStore {
    async fn fetch_world(&self, id: i32) -> Outcome<World> {
        self.connect()?;
        let attempt = {
            let mut fetches = self.fetches.lock().unwrap();
            *fetches += 1;
            *fetches
        };
        if let Mode::FailFetchAt(n) = self.mode {
            if n == attempt {
                return Err(DbError::Query(sqlx::Error::RowNotFound));
            }
        }
        let value = self.worlds.lock().unwrap().get(&id).copied();
        value
            .map(|value| World::new(id, value))
            .ok_or(DbError::NotFound {
                resource: "world",
                id,
            })
    }

    async fn update_world(&self, world: World) -> Outcome<()> {
        self.connect()?;
        self.worlds.lock().unwrap().insert(world.id, world.value);
        Ok(())
    }

    async fn fetch_fortunes(&self) -> Outcome<Vec<Fortune>> {
        self.connect()?;
        Ok(self.fortunes.clone())
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    build_router(AppState::new(store))
}

pub fn healthy() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new(Mode::Healthy, Vec::new()));
    (store.clone(), app(store))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
