//! Undirected weighted graph of delivery locations.

mod store;

pub use store::{GraphError, GraphStore};
