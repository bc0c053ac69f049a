//! Adjacency store for the location graph.

use std::collections::HashMap;

use thiserror::Error;

/// Errors produced while building the location graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge carried a negative travel time.
    #[error("edge {from} - {to} has negative weight {weight}")]
    InvalidEdge {
        /// Origin location code.
        from: String,
        /// Destination location code.
        to: String,
        /// The rejected weight.
        weight: i64,
    },
}

/// An undirected weighted graph keyed by short location codes.
///
/// Every inserted edge stores both directed arcs, so the adjacency is
/// reciprocal by construction: `u` lists `v` exactly when `v` lists `u`,
/// with equal weight. Re-inserting an existing pair overwrites the stored
/// weight (last write wins). Weights are non-negative travel times;
/// negative input is rejected at ingestion.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
///
/// let mut graph = GraphStore::new();
/// graph.add_edge("A", "B", 5).unwrap();
/// graph.add_edge("B", "C", 3).unwrap();
///
/// assert_eq!(graph.weight("A", "B"), Some(5));
/// assert_eq!(graph.weight("B", "A"), Some(5));
/// assert_eq!(graph.num_nodes(), 3);
/// assert!(graph.add_edge("A", "C", -1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: HashMap<String, HashMap<String, u64>>,
}

impl GraphStore {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from plain `(origin, destination, weight)` records,
    /// the in-memory form external file readers produce.
    ///
    /// Stops at the first negative weight.
    pub fn from_edges<I, S>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from.as_ref(), to.as_ref(), weight)?;
        }
        Ok(graph)
    }

    /// Inserts (or overwrites) the undirected edge between `from` and `to`.
    ///
    /// Both directed arcs are stored. Returns [`GraphError::InvalidEdge`]
    /// when the weight is negative, leaving the graph unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        let weight = weight as u64;
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string(), weight);
        Ok(())
    }

    /// Iterates the neighbors of `node` with their edge weights.
    ///
    /// Empty for a node the graph does not know.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(neighbor, &weight)| (neighbor.as_str(), weight)))
    }

    /// Weight of the edge between `from` and `to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<u64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Returns `true` if the graph knows the given location code.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterates all known location codes.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of known locations.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }
}
