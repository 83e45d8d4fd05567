//! Domain models
//!
//! Request input is normalized when these types are constructed.
//! Nothing here touches the database or the network.

pub mod fortune;
pub mod query_count;
pub mod world;

pub use fortune::{prepare_fortunes, Fortune, SYNTHETIC_MESSAGE};
pub use query_count::{QueryCount, MAX_QUERIES, MIN_QUERIES, QUERIES_KEY};
pub use world::{World, WORLD_ROWS};
