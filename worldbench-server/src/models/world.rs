//! World rows

use serde::Serialize;

/// Number of rows in the `world` table. Ids are dense in `1..=WORLD_ROWS`.
pub const WORLD_ROWS: i32 = 10_000;

/// A single `world` row.
///
/// `id` never changes; `value` is the only column the updates route writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct World {
    pub id: i32,
    pub value: i32,
}

impl World {
    pub fn new(id: i32, value: i32) -> Self {
        Self { id, value }
    }
}
