//! Selection result type.

use serde::{Deserialize, Serialize};

use super::Delivery;

/// The outcome of one strategy run.
///
/// Holds the accepted deliveries in execution order, the total bonus they
/// earn, and the offers the strategy passed over (infeasible, unreachable,
/// or crowded out).
///
/// # Examples
///
/// ```
/// use delivery_auction::models::{Delivery, Selection};
///
/// let mut selection = Selection::new();
/// selection.accept(Delivery::new(10, "C", 100));
/// selection.skip(Delivery::new(5, "B", 40));
/// assert_eq!(selection.total_profit(), 100);
/// assert_eq!(selection.num_accepted(), 1);
/// assert_eq!(selection.skipped().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    accepted: Vec<Delivery>,
    skipped: Vec<Delivery>,
    total_profit: u64,
}

impl Selection {
    /// Creates an empty selection (no deliveries, zero profit).
    pub fn new() -> Self {
        Self {
            accepted: Vec::new(),
            skipped: Vec::new(),
            total_profit: 0,
        }
    }

    /// Appends an accepted delivery and adds its bonus to the total.
    pub fn accept(&mut self, delivery: Delivery) {
        self.total_profit += delivery.bonus();
        self.accepted.push(delivery);
    }

    /// Records a delivery the strategy passed over.
    pub fn skip(&mut self, delivery: Delivery) {
        self.skipped.push(delivery);
    }

    /// Accepted deliveries in the order they are executed.
    pub fn accepted(&self) -> &[Delivery] {
        &self.accepted
    }

    /// Offers that were not accepted.
    pub fn skipped(&self) -> &[Delivery] {
        &self.skipped
    }

    /// Total bonus earned by the accepted deliveries.
    pub fn total_profit(&self) -> u64 {
        self.total_profit
    }

    /// Number of accepted deliveries.
    pub fn num_accepted(&self) -> usize {
        self.accepted.len()
    }

    /// Returns `true` if no delivery was accepted.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
