//! Greedy chained-model baseline.
//!
//! Processes deliveries in a configured order and accepts each one that is
//! feasible from the current state; a rejected offer is never reconsidered.
//! After an acceptance the courier stays at the delivery destination (the
//! chained model, no forced return to the depot), so later feasibility is
//! judged from there. Deterministic and fast, but a baseline for
//! comparison: it does not search, and its travel model differs from the
//! round-trip strategies, so results are not comparable one-for-one.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GraphStore;
use crate::models::{DeliveryCatalog, DispatchState, Selection};
use crate::shortest_path::PathCache;

/// Processing order for the greedy baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreedyOrder {
    /// Ascending deadline, most urgent first.
    ByDeadline,
    /// Descending bonus, richest first.
    ByBonusDesc,
}

/// Selects deliveries greedily under the chained model.
///
/// Offers are processed in the given order; each is accepted iff it is
/// feasible from the current position and clock, otherwise it is skipped
/// permanently. O(n log n) for the sort plus one shortest-path tree per
/// distinct position visited.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::models::DeliveryCatalog;
/// use delivery_auction::selection::{greedy, GreedyOrder};
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// let catalog = DeliveryCatalog::from_records([(10, "C", 100)]);
///
/// let selection = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
/// assert_eq!(selection.total_profit(), 100);
/// assert_eq!(selection.num_accepted(), 1);
/// ```
pub fn greedy(
    graph: &GraphStore,
    catalog: &DeliveryCatalog,
    depot: &str,
    order: GreedyOrder,
) -> Selection {
    let ordered = match order {
        GreedyOrder::ByDeadline => catalog.by_deadline(),
        GreedyOrder::ByBonusDesc => catalog.by_bonus_desc(),
    };
    debug!(
        "greedy run: {} deliveries from depot {depot}, order {order:?}",
        ordered.len()
    );

    let mut cache = PathCache::new(graph);
    let mut state = DispatchState::at_depot(depot);
    let mut selection = Selection::new();

    for delivery in ordered {
        match cache.cost(state.position(), delivery.destination()) {
            Some(travel) if state.is_feasible(travel, delivery.deadline()) => {
                state.accept_chained(travel, &delivery);
                selection.accept(delivery);
            }
            _ => selection.skip(delivery),
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> GraphStore {
        GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).expect("valid edges")
    }

    #[test]
    fn test_accepts_feasible_delivery() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(10, "C", 100)]);
        let selection = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(selection.total_profit(), 100);
        assert_eq!(selection.num_accepted(), 1);
        assert!(selection.skipped().is_empty());
    }

    #[test]
    fn test_skips_infeasible_delivery() {
        let graph = line_graph();
        // Travel to C costs 8 > deadline 5.
        let catalog = DeliveryCatalog::from_records([(5, "C", 100)]);
        let selection = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(selection.total_profit(), 0);
        assert!(selection.is_empty());
        assert_eq!(selection.skipped().len(), 1);
    }

    #[test]
    fn test_chained_position_carries_over() {
        let graph = line_graph();
        // B by 5 (travel 5), then C by 9: from B the leg costs 3, 5+3 <= 9.
        let catalog = DeliveryCatalog::from_records([(5, "B", 10), (9, "C", 10)]);
        let selection = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(selection.total_profit(), 20);
        assert_eq!(selection.num_accepted(), 2);
    }

    #[test]
    fn test_order_changes_outcome() {
        // B and C both 5 away from the depot, not connected to each other.
        let graph = GraphStore::from_edges([("A", "B", 5), ("A", "C", 5)]).expect("valid edges");
        let catalog = DeliveryCatalog::from_records([(5, "B", 10), (5, "C", 50)]);

        // Deadline order takes B first, leaving C unreachable in time.
        let by_deadline = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(by_deadline.total_profit(), 10);

        // Bonus order takes C first instead.
        let by_bonus = greedy(&graph, &catalog, "A", GreedyOrder::ByBonusDesc);
        assert_eq!(by_bonus.total_profit(), 50);
    }

    #[test]
    fn test_unknown_destination_skipped() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(10, "Z", 100), (10, "B", 20)]);
        let selection = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(selection.total_profit(), 20);
        assert_eq!(selection.skipped().len(), 1);
        assert_eq!(selection.skipped()[0].destination(), "Z");
    }

    #[test]
    fn test_empty_catalog() {
        let graph = line_graph();
        let selection = greedy(&graph, &DeliveryCatalog::new(), "A", GreedyOrder::ByDeadline);
        assert!(selection.is_empty());
        assert_eq!(selection.total_profit(), 0);
    }

    #[test]
    fn test_idempotent() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(5, "B", 10), (9, "C", 10)]);
        let first = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        let second = greedy(&graph, &catalog, "A", GreedyOrder::ByDeadline);
        assert_eq!(first, second);
    }
}
