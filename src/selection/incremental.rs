//! Take-or-skip prefix scan under the round-trip model.
//!
//! Deliveries are sorted by ascending deadline and scanned left to right.
//! For each prefix the scan records the best achievable profit and the time
//! the courier is free at the depot again after earning it. Delivery `i`
//! can extend any earlier prefix `j` whose free time still meets the
//! deadline (`free[j] + cost(depot, x) <= d`); taking it adds the bonus to
//! `dp[j]` and advances the free time by the round trip. Each step keeps
//! the better of skipping (`dp[i-1]`) and the best extension.
//!
//! Not guaranteed globally optimal: each prefix keeps a single
//! (profit, free-time) pair, so an equal-profit schedule with a different
//! free time is discarded even when it would enable a better tail. The
//! exhaustive strategy is the reference answer on small catalogs.

use log::debug;

use crate::graph::GraphStore;
use crate::models::{DeliveryCatalog, DispatchState, Selection};
use crate::shortest_path::PathCache;

/// Selects deliveries with a deadline-ordered take-or-skip scan.
///
/// O(n²) over the catalog plus one shortest-path tree from the depot.
/// Unreachable destinations are skipped, never fatal; the empty catalog
/// yields an empty selection with zero profit.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::models::DeliveryCatalog;
/// use delivery_auction::selection::incremental;
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// // Two offers to C under one deadline: only one round trip fits.
/// let catalog = DeliveryCatalog::from_records([(10, "C", 50), (10, "C", 80)]);
///
/// let selection = incremental(&graph, &catalog, "A");
/// assert_eq!(selection.total_profit(), 80);
/// ```
pub fn incremental(graph: &GraphStore, catalog: &DeliveryCatalog, depot: &str) -> Selection {
    let ordered = catalog.by_deadline();
    let n = ordered.len();
    debug!("incremental run: {n} deliveries from depot {depot}");

    let mut cache = PathCache::new(graph);
    let costs: Vec<Option<u64>> = ordered
        .iter()
        .map(|d| cache.cost(depot, d.destination()))
        .collect();

    // dp[i]: best profit over the first i deliveries; free[i]: depot time of
    // the schedule achieving dp[i]; take[i]: the prefix delivery i-1 was
    // accepted on top of, when it was.
    let mut dp = vec![0u64; n + 1];
    let mut free = vec![0u64; n + 1];
    let mut take: Vec<Option<usize>> = vec![None; n + 1];

    for i in 1..=n {
        let delivery = &ordered[i - 1];
        dp[i] = dp[i - 1];
        free[i] = free[i - 1];
        let Some(one_way) = costs[i - 1] else {
            continue; // unreachable destination: always skip
        };

        // Best compatible prefix: maximum profit, then earliest free time.
        let mut best: Option<usize> = None;
        for j in 0..i {
            if free[j] + one_way > delivery.deadline() {
                continue;
            }
            let improves = match best {
                None => true,
                Some(b) => dp[j] > dp[b] || (dp[j] == dp[b] && free[j] < free[b]),
            };
            if improves {
                best = Some(j);
            }
        }

        if let Some(j) = best {
            let candidate = dp[j] + delivery.bonus();
            if candidate > dp[i] {
                dp[i] = candidate;
                free[i] = free[j] + one_way * 2;
                take[i] = Some(j);
            }
        }
    }

    // Walk the take records backward to recover the accepted set.
    let mut accepted_idx = Vec::new();
    let mut i = n;
    while i > 0 {
        match take[i] {
            Some(j) => {
                accepted_idx.push(i - 1);
                i = j;
            }
            None => i -= 1,
        }
    }
    accepted_idx.reverse();

    // Replay in deadline order: accepted deliveries advance the clock, the
    // rest are recorded as skipped.
    let mut selection = Selection::new();
    let mut state = DispatchState::at_depot(depot);
    let mut next = accepted_idx.iter().copied().peekable();
    for (idx, delivery) in ordered.into_iter().enumerate() {
        if next.peek() == Some(&idx) {
            next.next();
            let one_way = costs[idx].expect("accepted deliveries are reachable");
            state.accept_round_trip(one_way, &delivery, depot);
            selection.accept(delivery);
        } else {
            selection.skip(delivery);
        }
    }
    debug!(
        "incremental result: profit {} with the clock at {}",
        selection.total_profit(),
        state.time()
    );
    selection
}
