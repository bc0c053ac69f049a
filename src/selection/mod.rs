//! Delivery-selection strategies.
//!
//! All strategies share one feasibility rule — a delivery (deadline `d`,
//! destination `x`) is acceptable from state (time `t`, position `p`) only
//! when `t + cost(p, x) <= d` — and differ in how acceptance advances the
//! state and how hard they search:
//!
//! - [`greedy`] — Chained-model baseline in a caller-chosen order, O(n log n)
//! - [`exhaustive`] — Exact round-trip subset search, O(2ⁿ·n), size-limited
//! - [`incremental`] — Round-trip take-or-skip prefix scan, O(n²)
//!
//! Per-delivery infeasibility (deadline out of reach, unknown or
//! unreachable destination) is never an error: the offer is recorded on
//! [`Selection::skipped`](crate::models::Selection::skipped) and processing
//! continues. Only configuration misuse is fatal.

mod exhaustive;
mod greedy;
mod incremental;

use thiserror::Error;

pub use exhaustive::{exhaustive, DEFAULT_EXHAUSTIVE_LIMIT};
pub use greedy::{greedy, GreedyOrder};
pub use incremental::incremental;

/// Errors produced when a strategy cannot run at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The exhaustive strategy was invoked with more deliveries than its
    /// subset-enumeration ceiling allows.
    #[error("exhaustive search over {count} deliveries exceeds the limit of {limit}")]
    StrategyLimitExceeded {
        /// Number of deliveries in the catalog.
        count: usize,
        /// The configured ceiling.
        limit: usize,
    },
}
