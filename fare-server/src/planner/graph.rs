//! Flight graph built from a day's flights.
//!
//! The graph is an adjacency list keyed by departure city. Every flight
//! is kept, including parallel flights between the same pair of cities
//! and flights that start and end in the same city; the search decides
//! which of them matter.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::domain::{City, Flight, Price};

/// Directed, weighted graph of flights.
///
/// Cities with no departing flights have no entry; [`FlightGraph::departures`]
/// reports them as having an empty list. Once built, a graph is only read,
/// so it can be shared between concurrent searches behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FlightGraph<N = City> {
    /// Map from departure city to `(arrival city, price)` for each flight.
    departures: HashMap<N, Vec<(N, Price)>>,

    /// Total number of flights, counting parallel flights separately.
    flight_count: usize,
}

impl<N: Eq + Hash> FlightGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            departures: HashMap::new(),
            flight_count: 0,
        }
    }

    /// Build a graph from a collection of flights.
    ///
    /// Any finite collection is accepted, including an empty one.
    ///
    /// # Example
    ///
    /// ```
    /// use fare_server::domain::{Flight, Price};
    /// use fare_server::planner::FlightGraph;
    ///
    /// let graph = FlightGraph::build([
    ///     Flight::new("A", "B", Price::new(200)),
    ///     Flight::new("A", "B", Price::new(100)),
    /// ]);
    /// assert_eq!(graph.departures(&"A").len(), 2);
    /// assert!(graph.departures(&"B").is_empty());
    /// ```
    pub fn build<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight<N>>,
    {
        let mut graph = Self::new();
        for flight in flights {
            graph.add_flight(flight);
        }
        graph
    }

    /// Add a single flight.
    ///
    /// A flight between a pair that already has one is added alongside it,
    /// never in place of it.
    pub fn add_flight(&mut self, flight: Flight<N>) {
        let (source, destination, price) = flight.into_parts();
        self.departures
            .entry(source)
            .or_default()
            .push((destination, price));
        self.flight_count += 1;
    }

    /// Flights departing from `city`, as `(arrival city, price)` pairs.
    ///
    /// Returns an empty slice for a city with no departures, including one
    /// the graph has never heard of.
    pub fn departures(&self, city: &N) -> &[(N, Price)] {
        self.departures
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of flights.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// Number of cities with at least one departing flight.
    pub fn origin_count(&self) -> usize {
        self.departures.len()
    }

    /// Number of distinct cities appearing as either end of a flight.
    pub fn city_count(&self) -> usize {
        let mut cities: HashSet<&N> = self.departures.keys().collect();
        for flights in self.departures.values() {
            cities.extend(flights.iter().map(|(to, _)| to));
        }
        cities.len()
    }

    /// Returns true if the graph has no flights.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}

impl<N: Eq + Hash> Default for FlightGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> FromIterator<Flight<N>> for FlightGraph<N> {
    fn from_iter<I: IntoIterator<Item = Flight<N>>>(iter: I) -> Self {
        Self::build(iter)
    }
}
