//! Route handlers organized by benchmark

pub mod fortunes;
pub mod hello;
pub mod worlds;
