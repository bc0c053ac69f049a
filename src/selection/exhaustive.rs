//! Exact subset search under the round-trip model.
//!
//! Enumerates every subset of the catalog and applies each in catalog index
//! order: depart the depot, deliver, return to the depot before the next
//! member is considered. A subset is valid only when every member meets its
//! deadline in that fixed order; the best total bonus wins, and equal-profit
//! ties keep the earliest subset in ascending bitmask order. Exponential —
//! guarded by a hard ceiling checked before any enumeration starts.
//!
//! Subsets are evaluated independently, so the bitmask range is sharded
//! across rayon workers; the reduction uses a total (profit, bitmask) order
//! and returns exactly what a sequential scan would.

use log::debug;
use rayon::prelude::*;

use crate::graph::GraphStore;
use crate::models::{Delivery, DeliveryCatalog, DispatchState, Selection};
use crate::shortest_path::PathCache;

use super::SelectError;

/// Default ceiling on catalog size for subset enumeration.
///
/// 2²⁰ subsets evaluate in well under a second; past the mid-twenties the
/// scan stops being practical on a single machine.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 20;

/// Selects the profit-maximizing delivery subset by exhaustive search.
///
/// Returns [`SelectError::StrategyLimitExceeded`] when the catalog holds
/// more than `limit` deliveries; the check runs before any enumeration
/// work. A member with an unreachable destination invalidates every subset
/// containing it (subsets omitting it cover the skip). The empty catalog
/// yields an empty selection with zero profit.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::models::DeliveryCatalog;
/// use delivery_auction::selection::{exhaustive, DEFAULT_EXHAUSTIVE_LIMIT};
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// // Two offers to C under one deadline: only one round trip fits.
/// let catalog = DeliveryCatalog::from_records([(10, "C", 50), (10, "C", 80)]);
///
/// let selection = exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).unwrap();
/// assert_eq!(selection.total_profit(), 80);
/// assert_eq!(selection.accepted()[0].bonus(), 80);
/// ```
pub fn exhaustive(
    graph: &GraphStore,
    catalog: &DeliveryCatalog,
    depot: &str,
    limit: usize,
) -> Result<Selection, SelectError> {
    let limit = limit.min(63); // the subset mask is a u64
    let n = catalog.len();
    if n > limit {
        return Err(SelectError::StrategyLimitExceeded { count: n, limit });
    }

    let deliveries = catalog.deliveries();
    let mut cache = PathCache::new(graph);
    // Snapshot the depot-origin costs up front; the parallel scan below
    // reads this immutable slice only.
    let costs: Vec<Option<u64>> = deliveries
        .iter()
        .map(|d| cache.cost(depot, d.destination()))
        .collect();

    let subsets: u64 = 1 << n;
    debug!("exhaustive run: {n} deliveries, {subsets} subsets from depot {depot}");

    let best = (0..subsets)
        .into_par_iter()
        .filter_map(|mask| subset_profit(mask, deliveries, &costs).map(|profit| (profit, mask)))
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)));
    let (_, mask) = best.expect("the empty subset is always valid");

    // Replay the winning subset to build the selection.
    let mut selection = Selection::new();
    let mut state = DispatchState::at_depot(depot);
    for (i, delivery) in deliveries.iter().enumerate() {
        if mask & (1 << i) != 0 {
            let one_way = costs[i].expect("members of a valid subset are reachable");
            state.accept_round_trip(one_way, delivery, depot);
            selection.accept(delivery.clone());
        } else {
            selection.skip(delivery.clone());
        }
    }
    debug!(
        "exhaustive winner: profit {} with the clock at {}",
        selection.total_profit(),
        state.time()
    );
    Ok(selection)
}

/// Total bonus of the subset when every member is feasible in index order
/// under the round-trip model, `None` otherwise.
fn subset_profit(mask: u64, deliveries: &[Delivery], costs: &[Option<u64>]) -> Option<u64> {
    let mut time: u64 = 0;
    let mut profit: u64 = 0;
    for (i, delivery) in deliveries.iter().enumerate() {
        if mask & (1 << i) == 0 {
            continue;
        }
        let one_way = costs[i]?;
        if time + one_way > delivery.deadline() {
            return None;
        }
        time += one_way * 2;
        profit += delivery.bonus();
    }
    Some(profit)
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
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 100);
        assert_eq!(selection.num_accepted(), 1);
    }

    #[test]
    fn test_infeasible_delivery_yields_empty() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(5, "C", 100)]);
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 0);
        assert!(selection.is_empty());
        assert_eq!(selection.skipped().len(), 1);
    }

    #[test]
    fn test_picks_richer_of_conflicting_offers() {
        let graph = line_graph();
        // Round trip to C costs 16, so only one offer fits before time 10.
        let catalog = DeliveryCatalog::from_records([(10, "C", 50), (10, "C", 80)]);
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 80);
        assert_eq!(selection.num_accepted(), 1);
        assert_eq!(selection.accepted()[0].bonus(), 80);
    }

    #[test]
    fn test_subsets_applied_in_index_order() {
        let graph = GraphStore::from_edges([("A", "B", 5)]).expect("valid edges");
        // In index order the loose deadline runs first and pushes the clock
        // past the tight one, so the pair is invalid even though the reverse
        // order would fit both.
        let catalog = DeliveryCatalog::from_records([(100, "B", 10), (10, "B", 10)]);
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 10);
        assert_eq!(selection.num_accepted(), 1);
        // Equal-profit tie between the two singletons keeps the earliest
        // subset in ascending bitmask order, i.e. index 0.
        assert_eq!(selection.accepted()[0].deadline(), 100);
    }

    #[test]
    fn test_unreachable_member_excluded() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(10, "Z", 500), (10, "C", 50)]);
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 50);
        assert_eq!(selection.skipped().len(), 1);
        assert_eq!(selection.skipped()[0].destination(), "Z");
    }

    #[test]
    fn test_limit_exceeded_before_work() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(10, "B", 1), (10, "B", 2), (10, "B", 3)]);
        let err = exhaustive(&graph, &catalog, "A", 2).expect_err("over the limit");
        assert_eq!(
            err,
            SelectError::StrategyLimitExceeded { count: 3, limit: 2 }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let graph = line_graph();
        let selection = exhaustive(&graph, &DeliveryCatalog::new(), "A", DEFAULT_EXHAUSTIVE_LIMIT)
            .expect("within limit");
        assert!(selection.is_empty());
        assert_eq!(selection.total_profit(), 0);
    }

    #[test]
    fn test_combines_compatible_offers() {
        let graph = line_graph();
        // Round trips: B = 10, C = 16. Both fit in deadline order 5, 26.
        let catalog = DeliveryCatalog::from_records([(5, "B", 10), (26, "C", 20)]);
        let selection =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(selection.total_profit(), 30);
        assert_eq!(selection.num_accepted(), 2);
    }

    #[test]
    fn test_idempotent() {
        let graph = line_graph();
        let catalog = DeliveryCatalog::from_records([(10, "C", 50), (10, "C", 80), (5, "B", 10)]);
        let first =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        let second =
            exhaustive(&graph, &catalog, "A", DEFAULT_EXHAUSTIVE_LIMIT).expect("within limit");
        assert_eq!(first, second);
    }
}
