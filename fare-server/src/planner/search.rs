//! Cheapest-fare search.
//!
//! Finds the lowest total price from one city to another by combining
//! flights, using Dijkstra's algorithm over a [`FlightGraph`]. Only the
//! total price is produced, not the itinerary.
//!
//! The search keeps its own table of best known prices and its own
//! frontier, so any number of searches may run against the same graph at
//! once.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use tracing::debug;

use crate::domain::{City, Price};

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::graph::FlightGraph;

/// Error from a budgeted search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Settled more cities than the configuration allows
    #[error("search gave up after settling {settled} cities")]
    BudgetExhausted { settled: usize },

    /// Ran past the configured deadline
    #[error("search timed out after settling {settled} cities")]
    Timeout { settled: usize },
}

/// Counters describing the work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cities whose departures were expanded.
    pub settled: usize,

    /// Frontier entries discarded because a cheaper price was already known.
    pub stale_skipped: usize,

    /// Times a cheaper price to a city was found and queued.
    pub relaxations: usize,

    /// Largest frontier size seen, stale entries included.
    pub peak_frontier: usize,
}

/// Outcome of a single iteration of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A city was settled and its departures relaxed.
    Expanded,

    /// A superseded frontier entry was discarded.
    Stale,

    /// The destination was reached at this price. The search is finished.
    Reached(Price),

    /// The frontier ran dry; the destination is unreachable.
    Exhausted,
}

/// An in-progress search that can be driven one step at a time.
///
/// Callers that need to stop early (a deadline, a cancelled request) can
/// simply stop calling [`Search::step`]; nothing outside the `Search` is
/// modified. Once the search has finished, further calls to `step` keep
/// returning the final [`Step`].
pub struct Search<'a, N> {
    graph: &'a FlightGraph<N>,
    destination: &'a N,

    /// Best known price to each city reached so far.
    best: HashMap<&'a N, Price>,

    frontier: Frontier<&'a N>,
    stats: SearchStats,
    finished: Option<Step>,
}

impl<'a, N: Eq + Hash> Search<'a, N> {
    /// Start a search from `source` to `destination`.
    ///
    /// Neither city needs to appear in the graph.
    pub fn new(graph: &'a FlightGraph<N>, source: &'a N, destination: &'a N) -> Self {
        let mut best = HashMap::new();
        let mut frontier = Frontier::new();
        best.insert(source, Price::ZERO);
        frontier.push(source, Price::ZERO);

        Self {
            graph,
            destination,
            best,
            frontier,
            stats: SearchStats {
                peak_frontier: 1,
                ..SearchStats::default()
            },
            finished: None,
        }
    }

    /// Run one iteration of the search loop.
    pub fn step(&mut self) -> Step {
        if let Some(done) = self.finished {
            return done;
        }

        let Some((city, price)) = self.frontier.pop() else {
            return self.finish(Step::Exhausted);
        };

        // Prices leave the frontier in non-decreasing order, so the first
        // time the destination comes out its price is final.
        if city == self.destination {
            return self.finish(Step::Reached(price));
        }

        if self.best.get(city).is_some_and(|known| price > *known) {
            self.stats.stale_skipped += 1;
            return Step::Stale;
        }

        self.stats.settled += 1;

        let graph = self.graph;
        for (next, fare) in graph.departures(city) {
            let candidate = price + *fare;
            let cheaper = match self.best.get(next) {
                Some(known) => candidate < *known,
                None => true,
            };
            if cheaper {
                self.best.insert(next, candidate);
                self.frontier.push(next, candidate);
                self.stats.relaxations += 1;
            }
        }

        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        Step::Expanded
    }

    /// Drive the search to completion.
    ///
    /// Returns the cheapest price, or `None` if the destination is
    /// unreachable.
    pub fn run(&mut self) -> Option<Price> {
        loop {
            match self.step() {
                Step::Reached(price) => return Some(price),
                Step::Exhausted => return None,
                Step::Expanded | Step::Stale => {}
            }
        }
    }

    /// Work done so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn finish(&mut self, step: Step) -> Step {
        self.finished = Some(step);
        step
    }
}

/// Find the cheapest total price from `source` to `destination`.
///
/// Returns `None` when no combination of flights connects them. Asking
/// for the price from a city to itself is always zero, whether or not the
/// city has any flights.
///
/// # Example
///
/// ```
/// use fare_server::domain::{Flight, Price};
/// use fare_server::planner::{FlightGraph, cheapest_cost};
///
/// let graph = FlightGraph::build([
///     Flight::new("A", "B", Price::new(100)),
///     Flight::new("B", "C", Price::new(40)),
///     Flight::new("A", "C", Price::new(150)),
/// ]);
/// assert_eq!(cheapest_cost(&graph, &"A", &"C"), Some(Price::new(140)));
/// assert_eq!(cheapest_cost(&graph, &"C", &"A"), None);
/// ```
pub fn cheapest_cost<N: Eq + Hash>(
    graph: &FlightGraph<N>,
    source: &N,
    destination: &N,
) -> Option<Price> {
    if source == destination {
        return Some(Price::ZERO);
    }
    Search::new(graph, source, destination).run()
}

/// Result of a budgeted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cheapest price, or `None` if the destination is unreachable.
    pub cost: Option<Price>,

    /// Work the search did.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Whether any route to the destination exists.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Cheapest-fare planner applying the limits from a [`SearchConfig`].
pub struct Planner<'a, N = City> {
    graph: &'a FlightGraph<N>,
    config: &'a SearchConfig,
}

impl<'a, N: Eq + Hash> Planner<'a, N> {
    /// Create a new planner.
    pub fn new(graph: &'a FlightGraph<N>, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find the cheapest price from `source` to `destination`.
    ///
    /// Fails only if the search runs past one of the configured limits.
    pub fn search(&self, source: &N, destination: &N) -> Result<SearchOutcome, SearchError> {
        if source == destination {
            return Ok(SearchOutcome {
                cost: Some(Price::ZERO),
                stats: SearchStats::default(),
            });
        }

        let started = Instant::now();
        let mut search = Search::new(self.graph, source, destination);

        let cost = loop {
            match search.step() {
                Step::Reached(price) => break Some(price),
                Step::Exhausted => break None,
                Step::Expanded | Step::Stale => {}
            }
            self.check_limits(&search.stats(), started)?;
        };

        let stats = search.stats();
        debug!(
            cost = ?cost.map(Price::amount),
            settled = stats.settled,
            stale_skipped = stats.stale_skipped,
            relaxations = stats.relaxations,
            peak_frontier = stats.peak_frontier,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Cheapest-fare search complete"
        );

        Ok(SearchOutcome { cost, stats })
    }

    fn check_limits(&self, stats: &SearchStats, started: Instant) -> Result<(), SearchError> {
        if let Some(max_settled) = self.config.max_settled {
            if stats.settled > max_settled {
                return Err(SearchError::BudgetExhausted {
                    settled: stats.settled,
                });
            }
        }

        if let Some(timeout) = self.config.timeout {
            if started.elapsed() >= timeout {
                return Err(SearchError::Timeout {
                    settled: stats.settled,
                });
            }
        }

        Ok(())
    }
}
