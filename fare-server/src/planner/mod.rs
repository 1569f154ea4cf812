//! Cheapest-fare planner.
//!
//! This module answers: "what is the cheapest way to get from this city
//! to that one, combining any of today's flights?"
//!
//! The graph is built once per dataset and only read afterwards. Each
//! search runs Dijkstra's algorithm with a lazily cleaned priority queue
//! and keeps all of its working state to itself.

mod config;
mod frontier;
mod graph;
mod search;


pub use config::SearchConfig;
pub use graph::FlightGraph;
pub use search::{
    Planner, Search, SearchError, SearchOutcome, SearchStats, Step, cheapest_cost,
};
