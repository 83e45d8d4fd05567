//! Single-row fetch, batch fetch, and batch update

use rand::Rng;

use super::error::Outcome;
use super::store::WorldStore;
use crate::models::{QueryCount, World, WORLD_ROWS};

/// Draw a value uniformly from `1..=WORLD_ROWS`.
///
/// Used for both random ids and replacement values.
pub fn random_value<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(1..=WORLD_ROWS)
}

/// Fetch one world row with a random id.
pub async fn fetch_random_world<S, R>(store: &S, rng: &mut R) -> Outcome<World>
where
    S: WorldStore + ?Sized,
    R: Rng + Send + ?Sized,
{
    let id = random_value(rng);
    store.fetch_world(id).await
}

/// Fetch `count` random rows, in call order.
///
/// Stops at the first failed fetch and returns that error; rows fetched so far
/// are dropped.
pub async fn fetch_worlds<S, R>(store: &S, count: QueryCount, rng: &mut R) -> Outcome<Vec<World>>
where
    S: WorldStore + ?Sized,
    R: Rng + Send + ?Sized,
{
    let mut worlds = Vec::with_capacity(count.get());
    for _ in 0..count.get() {
        worlds.push(fetch_random_world(store, rng).await?);
    }
    Ok(worlds)
}

/// Fetch `count` random rows, give each a new random value, and write them back.
///
/// Writes are issued one at a time in fetch order. A failed write aborts the
/// batch; earlier writes stay committed.
pub async fn update_worlds<S, R>(store: &S, count: QueryCount, rng: &mut R) -> Outcome<Vec<World>>
where
    S: WorldStore + ?Sized,
    R: Rng + Send + ?Sized,
{
    let mut worlds = fetch_worlds(store, count, rng).await?;

    for world in worlds.iter_mut() {
        world.value = random_value(rng);
    }

    for world in &worlds {
        store.update_world(*world).await?;
    }

    tracing::debug!(count = worlds.len(), "updated world rows");
    Ok(worlds)
}
