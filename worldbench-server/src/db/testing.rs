//! In-memory `WorldStore` for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::{DbError, Outcome};
use super::store::WorldStore;
use crate::models::{Fortune, World, WORLD_ROWS};

#[derive(Default)]
struct State {
    fetched: Vec<i32>,
    update_attempts: usize,
    updated: Vec<World>,
}

pub(crate) struct FakeStore {
    worlds: Mutex<HashMap<i32, i32>>,
    fortunes: Vec<Fortune>,
    fail_fetch_at: Option<usize>,
    fail_update_at: Option<usize>,
    refuse_connections: bool,
    state: Mutex<State>,
}

impl FakeStore {
    /// Full world table, `value = id`.
    pub fn new() -> Self {
        let worlds = (1..=WORLD_ROWS).map(|id| (id, id)).collect();
        Self::with_worlds(worlds)
    }

    pub fn empty() -> Self {
        Self::with_worlds(HashMap::new())
    }

    fn with_worlds(worlds: HashMap<i32, i32>) -> Self {
        Self {
            worlds: Mutex::new(worlds),
            fortunes: Vec::new(),
            fail_fetch_at: None,
            fail_update_at: None,
            refuse_connections: false,
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_fortunes(mut self, fortunes: Vec<Fortune>) -> Self {
        self.fortunes = fortunes;
        self
    }

    /// Fail the `n`th fetch (1-based) with a query error.
    pub fn fail_fetch_at(mut self, n: usize) -> Self {
        self.fail_fetch_at = Some(n);
        self
    }

    /// Fail the `n`th update (1-based) with a query error.
    pub fn fail_update_at(mut self, n: usize) -> Self {
        self.fail_update_at = Some(n);
        self
    }

    pub fn refuse_connections(mut self) -> Self {
        self.refuse_connections = true;
        self
    }

    pub fn value_of(&self, id: i32) -> i32 {
        self.worlds.lock().unwrap()[&id]
    }

    pub fn fetches(&self) -> usize {
        self.state.lock().unwrap().fetched.len()
    }

    pub fn fetched_ids(&self) -> Vec<i32> {
        self.state.lock().unwrap().fetched.clone()
    }

    pub fn updated(&self) -> Vec<World> {
        self.state.lock().unwrap().updated.clone()
    }

    pub fn update_attempts(&self) -> usize {
        self.state.lock().unwrap().update_attempts
    }

    fn connect(&self) -> Outcome<()> {
        if self.refuse_connections {
            return Err(DbError::Connection(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl WorldStore for FakeStore {
    async fn fetch_world(&self, id: i32) -> Outcome<World> {
        let attempt = {
            let mut state = self.state.lock().unwrap();
            state.fetched.push(id);
            state.fetched.len()
        };
        self.connect()?;
        if self.fail_fetch_at == Some(attempt) {
            return Err(DbError::Query(sqlx::Error::RowNotFound));
        }

        let value = self.worlds.lock().unwrap().get(&id).copied();
        value
            .map(|value| World { id, value })
            .ok_or(DbError::NotFound {
                resource: "world",
                id,
            })
    }

    async fn update_world(&self, world: World) -> Outcome<()> {
        self.connect()?;
        let mut state = self.state.lock().unwrap();
        state.update_attempts += 1;
        if self.fail_update_at == Some(state.update_attempts) {
            return Err(DbError::Query(sqlx::Error::PoolClosed));
        }
        self.worlds.lock().unwrap().insert(world.id, world.value);
        state.updated.push(world);
        Ok(())
    }

    async fn fetch_fortunes(&self) -> Outcome<Vec<Fortune>> {
        self.connect()?;
        Ok(self.fortunes.clone())
    }
}
