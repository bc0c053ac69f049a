//! Per-origin memoization of shortest-path trees.

use std::collections::HashMap;

use crate::graph::GraphStore;

use super::engine::{PathResult, ShortestPathTree};

/// Lazily computed shortest-path trees, one per queried origin.
///
/// The round-trip strategies query a single origin (the depot); the chained
/// greedy walk queries each position it visits. Either way, one full
/// single-source run per distinct origin replaces a Dijkstra per
/// (origin, destination) pair.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::shortest_path::PathCache;
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// let mut cache = PathCache::new(&graph);
///
/// assert_eq!(cache.cost("A", "C"), Some(8));
/// assert_eq!(cache.cost("A", "B"), Some(5));
/// assert_eq!(cache.cost("C", "C"), Some(0));
/// assert_eq!(cache.cost("A", "Z"), None);
/// ```
#[derive(Debug)]
pub struct PathCache<'a> {
    graph: &'a GraphStore,
    trees: HashMap<String, ShortestPathTree>,
}

impl<'a> PathCache<'a> {
    /// Creates an empty cache over the given graph.
    pub fn new(graph: &'a GraphStore) -> Self {
        Self {
            graph,
            trees: HashMap::new(),
        }
    }

    /// Travel cost from `origin` to `destination`, `None` when unreachable.
    ///
    /// Follows the same degenerate rule as
    /// [`shortest_path`](crate::shortest_path::shortest_path): an unknown
    /// origin, or `origin == destination`, costs 0.
    pub fn cost(&mut self, origin: &str, destination: &str) -> Option<u64> {
        if origin == destination || !self.graph.contains(origin) {
            return Some(0);
        }
        self.tree(origin).cost(destination)
    }

    /// Full path from `origin` to `destination`.
    pub fn path(&mut self, origin: &str, destination: &str) -> PathResult {
        if origin == destination || !self.graph.contains(origin) {
            return PathResult::degenerate(origin);
        }
        self.tree(origin).path_to(destination)
    }

    /// Number of origins a tree has been built for.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    fn tree(&mut self, origin: &str) -> &ShortestPathTree {
        self.trees
            .entry(origin.to_string())
            .or_insert_with(|| ShortestPathTree::from_origin(self.graph, origin))
    }
}
