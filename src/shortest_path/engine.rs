//! Dijkstra engine with a min-priority frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use crate::graph::GraphStore;

/// Result of a shortest-path query.
///
/// `cost` is `None` when the destination is unreachable (the sentinel for
/// infinity; the path is then empty). A reachable result lists the nodes
/// from origin to destination inclusive. When several shortest paths exist
/// the reported one is whichever the frontier discovered first; callers may
/// rely on the cost, not on path identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    cost: Option<u64>,
    nodes: Vec<String>,
}

impl PathResult {
    pub(crate) fn reached(cost: u64, nodes: Vec<String>) -> Self {
        Self {
            cost: Some(cost),
            nodes,
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            cost: None,
            nodes: Vec::new(),
        }
    }

    pub(crate) fn degenerate(origin: &str) -> Self {
        Self {
            cost: Some(0),
            nodes: vec![origin.to_string()],
        }
    }

    /// Total travel cost, `None` when unreachable.
    pub fn cost(&self) -> Option<u64> {
        self.cost
    }

    /// Nodes from origin to destination inclusive; empty when unreachable.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns `true` if the destination was reached.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Frontier entry keyed by tentative distance.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// smallest distance first; the monotone sequence number keeps entries of
/// equal distance in FIFO discovery order.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    dist: u64,
    seq: u64,
    node: String,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Relaxation {
    dist: HashMap<String, u64>,
    prev: HashMap<String, String>,
    target_cost: Option<u64>,
}

/// Greedy edge relaxation from `origin`. With a target, stops as soon as the
/// target pops as the frontier minimum (final under non-negative weights);
/// without one, runs until the frontier empties.
fn relax(graph: &GraphStore, origin: &str, target: Option<&str>) -> Relaxation {
    let mut dist = HashMap::new();
    let mut prev = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut target_cost = None;

    dist.insert(origin.to_string(), 0);
    frontier.push(FrontierEntry {
        dist: 0,
        seq,
        node: origin.to_string(),
    });

    while let Some(FrontierEntry { dist: d, node, .. }) = frontier.pop() {
        if dist.get(&node).is_some_and(|&best| d > best) {
            continue; // stale entry, already settled closer
        }
        if target == Some(node.as_str()) {
            target_cost = Some(d);
            break;
        }
        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = d + weight;
            if dist.get(neighbor).map_or(true, |&best| candidate < best) {
                dist.insert(neighbor.to_string(), candidate);
                prev.insert(neighbor.to_string(), node.clone());
                seq += 1;
                frontier.push(FrontierEntry {
                    dist: candidate,
                    seq,
                    node: neighbor.to_string(),
                });
            }
        }
    }

    Relaxation {
        dist,
        prev,
        target_cost,
    }
}

/// Walks predecessor records back from `destination` to `origin`.
fn trace_path(prev: &HashMap<String, String>, origin: &str, destination: &str) -> Vec<String> {
    let mut nodes = vec![destination.to_string()];
    let mut current = destination;
    while current != origin {
        let parent = prev
            .get(current)
            .expect("settled nodes trace back to the origin");
        nodes.push(parent.clone());
        current = parent;
    }
    nodes.reverse();
    nodes
}

/// Computes the shortest path from `origin` to `destination`.
///
/// Classic Dijkstra over a min-priority frontier; requires the non-negative
/// weights [`GraphStore`](crate::graph::GraphStore) enforces. The search
/// exits early once the destination pops as the frontier minimum.
///
/// Degenerate cases are explicit: when `origin == destination`, or when the
/// graph does not know `origin`, the result is cost 0 with the single-node
/// path `[origin]`. An unreachable (or unknown) destination yields a `None`
/// cost and an empty path. Complexity is O((V+E) log V) per query; callers
/// issuing many queries from one origin should use
/// [`PathCache`](crate::shortest_path::PathCache) instead.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::shortest_path::shortest_path;
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
///
/// let result = shortest_path(&graph, "A", "C");
/// assert_eq!(result.cost(), Some(8));
/// assert_eq!(result.nodes(), ["A", "B", "C"]);
///
/// assert!(!shortest_path(&graph, "A", "Z").is_reachable());
/// ```
pub fn shortest_path(graph: &GraphStore, origin: &str, destination: &str) -> PathResult {
    if origin == destination || !graph.contains(origin) {
        return PathResult::degenerate(origin);
    }
    let run = relax(graph, origin, Some(destination));
    match run.target_cost {
        Some(cost) => PathResult::reached(cost, trace_path(&run.prev, origin, destination)),
        None => PathResult::unreachable(),
    }
}

/// Shortest-path distances and predecessors from one origin, computed once
/// by running the relaxation to exhaustion.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::shortest_path::ShortestPathTree;
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// let tree = ShortestPathTree::from_origin(&graph, "A");
///
/// assert_eq!(tree.cost("B"), Some(5));
/// assert_eq!(tree.cost("C"), Some(8));
/// assert_eq!(tree.cost("Z"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    origin: String,
    dist: HashMap<String, u64>,
    prev: HashMap<String, String>,
}

impl ShortestPathTree {
    /// Runs a full single-source Dijkstra from `origin`.
    pub fn from_origin(graph: &GraphStore, origin: &str) -> Self {
        let run = relax(graph, origin, None);
        Self {
            origin: origin.to_string(),
            dist: run.dist,
            prev: run.prev,
        }
    }

    /// The origin this tree was built from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Cost to `destination`, `None` when unreachable.
    pub fn cost(&self, destination: &str) -> Option<u64> {
        self.dist.get(destination).copied()
    }

    /// Full path to `destination`.
    pub fn path_to(&self, destination: &str) -> PathResult {
        if destination == self.origin {
            return PathResult::degenerate(&self.origin);
        }
        match self.cost(destination) {
            Some(cost) => PathResult::reached(
                cost,
                trace_path(&self.prev, &self.origin, destination),
            ),
            None => PathResult::unreachable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> GraphStore {
        GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).expect("valid edges")
    }

    #[test]
    fn test_line_graph_cost_and_path() {
        let graph = line_graph();
        let result = shortest_path(&graph, "A", "C");
        assert_eq!(result.cost(), Some(8));
        assert_eq!(result.nodes(), ["A", "B", "C"]);
        assert!(result.is_reachable());
    }

    #[test]
    fn test_self_query_is_zero() {
        let graph = line_graph();
        let result = shortest_path(&graph, "B", "B");
        assert_eq!(result.cost(), Some(0));
        assert_eq!(result.nodes(), ["B"]);
    }

    #[test]
    fn test_unknown_origin_degenerate() {
        let graph = line_graph();
        let result = shortest_path(&graph, "Z", "C");
        assert_eq!(result.cost(), Some(0));
        assert_eq!(result.nodes(), ["Z"]);
    }

    #[test]
    fn test_unknown_destination_unreachable() {
        let graph = line_graph();
        let result = shortest_path(&graph, "A", "Z");
        assert_eq!(result.cost(), None);
        assert!(result.nodes().is_empty());
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_disconnected_component_unreachable() {
        let graph = GraphStore::from_edges([("A", "B", 5), ("C", "D", 2)]).expect("valid edges");
        assert!(!shortest_path(&graph, "A", "D").is_reachable());
    }

    #[test]
    fn test_cost_symmetry() {
        let graph = line_graph();
        assert_eq!(
            shortest_path(&graph, "A", "C").cost(),
            shortest_path(&graph, "C", "A").cost()
        );
    }

    #[test]
    fn test_picks_cheaper_indirect_route() {
        // Direct A-C costs 10; A-B-C costs 8.
        let graph = GraphStore::from_edges([("A", "C", 10), ("A", "B", 5), ("B", "C", 3)])
            .expect("valid edges");
        let result = shortest_path(&graph, "A", "C");
        assert_eq!(result.cost(), Some(8));
        assert_eq!(result.nodes(), ["A", "B", "C"]);
    }

    #[test]
    fn test_equal_cost_paths_agree_on_cost() {
        // Two disjoint A→D routes, both costing 7.
        let graph = GraphStore::from_edges([
            ("A", "B", 3),
            ("B", "D", 4),
            ("A", "C", 4),
            ("C", "D", 3),
        ])
        .expect("valid edges");
        let result = shortest_path(&graph, "A", "D");
        assert_eq!(result.cost(), Some(7));
        assert_eq!(result.nodes().len(), 3);
        assert_eq!(result.nodes().first().map(String::as_str), Some("A"));
        assert_eq!(result.nodes().last().map(String::as_str), Some("D"));
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = GraphStore::from_edges([("A", "B", 0), ("B", "C", 0)]).expect("valid edges");
        assert_eq!(shortest_path(&graph, "A", "C").cost(), Some(0));
    }

    #[test]
    fn test_tree_matches_single_queries() {
        let graph = line_graph();
        let tree = ShortestPathTree::from_origin(&graph, "A");
        assert_eq!(tree.origin(), "A");
        assert_eq!(tree.cost("A"), Some(0));
        assert_eq!(tree.cost("B"), Some(5));
        assert_eq!(tree.cost("C"), Some(8));
        assert_eq!(tree.cost("Z"), None);
        assert_eq!(tree.path_to("C").nodes(), ["A", "B", "C"]);
        assert_eq!(tree.path_to("A").nodes(), ["A"]);
        assert!(!tree.path_to("Z").is_reachable());
    }
}
