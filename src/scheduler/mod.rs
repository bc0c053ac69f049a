//! Strategy dispatch and run configuration.
//!
//! The scheduler is a pure composition root: it holds the run configuration
//! (depot, strategy choice, per-strategy knobs), starts every run from
//! simulated time zero at the depot, and hands the graph and catalog to the
//! configured strategy, returning its selection unmodified.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GraphStore;
use crate::models::{DeliveryCatalog, Selection};
use crate::selection::{
    exhaustive, greedy, incremental, GreedyOrder, SelectError, DEFAULT_EXHAUSTIVE_LIMIT,
};

/// Available selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Chained-model baseline; fast, no optimality guarantee.
    Greedy,
    /// Exact round-trip subset search; exponential and size-limited.
    Exhaustive,
    /// Round-trip take-or-skip scan; the default.
    Incremental,
}

/// Run configuration: the depot plus strategy selection knobs.
///
/// The depot is an explicit parameter of every run, never a constant baked
/// into the strategies.
///
/// # Examples
///
/// ```
/// use delivery_auction::scheduler::{SchedulerConfig, Strategy};
/// use delivery_auction::selection::GreedyOrder;
///
/// let config = SchedulerConfig::new("DF")
///     .with_strategy(Strategy::Greedy)
///     .with_greedy_order(GreedyOrder::ByBonusDesc);
/// assert_eq!(config.depot(), "DF");
/// assert_eq!(config.strategy(), Strategy::Greedy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    depot: String,
    strategy: Strategy,
    greedy_order: GreedyOrder,
    exhaustive_limit: usize,
}

impl SchedulerConfig {
    /// Creates a configuration for the given depot.
    ///
    /// Defaults: incremental strategy, greedy order by deadline, exhaustive
    /// limit [`DEFAULT_EXHAUSTIVE_LIMIT`].
    pub fn new(depot: impl Into<String>) -> Self {
        Self {
            depot: depot.into(),
            strategy: Strategy::Incremental,
            greedy_order: GreedyOrder::ByDeadline,
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
        }
    }

    /// Sets the selection strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the processing order used by the greedy strategy.
    pub fn with_greedy_order(mut self, order: GreedyOrder) -> Self {
        self.greedy_order = order;
        self
    }

    /// Sets the catalog-size ceiling for the exhaustive strategy.
    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    /// The depot all deliveries depart from.
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The greedy processing order.
    pub fn greedy_order(&self) -> GreedyOrder {
        self.greedy_order
    }

    /// The exhaustive catalog-size ceiling.
    pub fn exhaustive_limit(&self) -> usize {
        self.exhaustive_limit
    }
}

/// Dispatches a delivery auction run to the configured strategy.
///
/// # Examples
///
/// ```
/// use delivery_auction::graph::GraphStore;
/// use delivery_auction::models::DeliveryCatalog;
/// use delivery_auction::scheduler::{Scheduler, SchedulerConfig, Strategy};
///
/// let graph = GraphStore::from_edges([("A", "B", 5), ("B", "C", 3)]).unwrap();
/// let catalog = DeliveryCatalog::from_records([(10, "C", 50), (10, "C", 80)]);
///
/// let scheduler = Scheduler::new(SchedulerConfig::new("A").with_strategy(Strategy::Exhaustive));
/// let selection = scheduler.run(&graph, &catalog).unwrap();
/// assert_eq!(selection.total_profit(), 80);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the configured strategy over the graph and catalog.
    ///
    /// Every run starts fresh at simulated time zero at the depot; the
    /// strategy's selection is returned unmodified.
    pub fn run(
        &self,
        graph: &GraphStore,
        catalog: &DeliveryCatalog,
    ) -> Result<Selection, SelectError> {
        debug!(
            "scheduling {} deliveries with {:?} from depot {}",
            catalog.len(),
            self.config.strategy,
            self.config.depot
        );
        let selection = match self.config.strategy {
            Strategy::Greedy => greedy(graph, catalog, &self.config.depot, self.config.greedy_order),
            Strategy::Exhaustive => {
                exhaustive(graph, catalog, &self.config.depot, self.config.exhaustive_limit)?
            }
            Strategy::Incremental => incremental(graph, catalog, &self.config.depot),
        };
        Ok(selection)
    }
}
