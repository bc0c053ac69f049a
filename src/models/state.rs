//! Dispatch state advanced as deliveries are committed.

use super::Delivery;

/// Simulated courier state: the clock, the current position, and the bonus
/// accumulated so far.
///
/// Every strategy run starts a fresh state at time zero at the depot. All
/// strategies share one feasibility rule — a delivery is acceptable only
/// when departing now still meets its deadline — and differ in how
/// acceptance advances the state:
///
/// - round trip: the clock advances by the out-and-back travel and the
///   courier is back at the depot before the next offer is considered
///   (exhaustive and incremental strategies);
/// - chained: the clock advances by the one-way travel and the courier
///   stays at the delivery destination (greedy baseline).
///
/// # Examples
///
/// ```
/// use delivery_auction::models::{Delivery, DispatchState};
///
/// let mut state = DispatchState::at_depot("A");
/// let offer = Delivery::new(10, "C", 100);
/// assert!(state.is_feasible(8, offer.deadline()));
///
/// state.accept_round_trip(8, &offer, "A");
/// assert_eq!(state.time(), 16);
/// assert_eq!(state.position(), "A");
/// assert_eq!(state.profit(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchState {
    time: u64,
    position: String,
    profit: u64,
}

impl DispatchState {
    /// Fresh state at the depot: time zero, no profit.
    pub fn at_depot(depot: impl Into<String>) -> Self {
        Self {
            time: 0,
            position: depot.into(),
            profit: 0,
        }
    }

    /// Current simulated time.
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Current location code.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Bonus accumulated so far.
    pub fn profit(&self) -> u64 {
        self.profit
    }

    /// The shared feasibility rule: departing now with the given travel
    /// cost still meets the deadline.
    pub fn is_feasible(&self, travel_cost: u64, deadline: u64) -> bool {
        self.time
            .checked_add(travel_cost)
            .map_or(false, |arrival| arrival <= deadline)
    }

    /// Commits a delivery under the round-trip model: the clock advances by
    /// the out-and-back travel and the courier returns to the depot.
    pub fn accept_round_trip(&mut self, one_way_cost: u64, delivery: &Delivery, depot: &str) {
        self.time = self.time.saturating_add(one_way_cost.saturating_mul(2));
        self.position = depot.to_string();
        self.profit += delivery.bonus();
    }

    /// Commits a delivery under the chained model: the clock advances by the
    /// one-way travel and the courier stays at the destination.
    pub fn accept_chained(&mut self, travel_cost: u64, delivery: &Delivery) {
        self.time = self.time.saturating_add(travel_cost);
        self.position = delivery.destination().to_string();
        self.profit += delivery.bonus();
    }
}
