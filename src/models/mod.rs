//! Domain model types for the delivery auction.
//!
//! Provides the core abstractions: delivery offers with deadlines and
//! bonuses, the catalog holding them, the selection result returned by the
//! strategies, and the dispatch state advanced as deliveries are committed.

mod delivery;
mod selection;
mod state;

pub use delivery::{Delivery, DeliveryCatalog};
pub use selection::Selection;
pub use state::DispatchState;
