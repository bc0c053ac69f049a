//! Single-source shortest paths over the location graph.
//!
//! - [`shortest_path`] — One-shot origin→destination query with early exit
//! - [`ShortestPathTree`] — Full single-source run, reused across queries
//! - [`PathCache`] — Lazily built per-origin trees

mod cache;
mod engine;

pub use cache::PathCache;
pub use engine::{shortest_path, PathResult, ShortestPathTree};
