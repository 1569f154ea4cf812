//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::planner::{FlightGraph, SearchConfig};

/// Largest `PUT /flights` body accepted unless configured otherwise.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Shared application state.
///
/// The current flight graph sits behind a swappable `Arc`. Queries take a
/// clone of that `Arc` and release the lock before searching, so loading a
/// new dataset never waits for, or disturbs, searches already running
/// against the old one.
#[derive(Clone)]
pub struct AppState {
    /// Graph used by new queries
    graph: Arc<RwLock<Arc<FlightGraph>>>,

    /// Limits applied to each search
    pub config: Arc<SearchConfig>,

    /// Largest flight dataset body accepted, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: FlightGraph, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(RwLock::new(Arc::new(graph))),
            config: Arc::new(config),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Override the largest accepted flight dataset body.
    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// The graph new queries should run against.
    pub async fn graph(&self) -> Arc<FlightGraph> {
        let guard = self.graph.read().await;
        Arc::clone(&guard)
    }

    /// Replace the graph, returning the one it supersedes.
    pub async fn replace_graph(&self, graph: FlightGraph) -> Arc<FlightGraph> {
        let graph = Arc::new(graph);
        let mut guard = self.graph.write().await;
        std::mem::replace(&mut *guard, graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Flight, Price};

    fn flight(from: &str, to: &str, price: u64) -> Flight {
        Flight::new(
            City::parse(from).unwrap(),
            City::parse(to).unwrap(),
            Price::new(price),
        )
    }

    #[tokio::test]
    async fn replace_swaps_graph() {
        let state = AppState::new(FlightGraph::new(), SearchConfig::default());
        assert!(state.graph().await.is_empty());
        assert_eq!(state.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);

        let previous = state
            .replace_graph(FlightGraph::build([flight("A", "B", 100)]))
            .await;
        assert!(previous.is_empty());
        assert_eq!(state.graph().await.flight_count(), 1);
    }

    #[tokio::test]
    async fn held_graph_survives_replacement() {
        let state = AppState::new(
            FlightGraph::build([flight("A", "B", 100)]),
            SearchConfig::default(),
        );

        let in_flight = state.graph().await;
        state
            .replace_graph(FlightGraph::build([flight("C", "D", 1), flight("D", "E", 1)]))
            .await;

        assert_eq!(in_flight.flight_count(), 1);
        assert_eq!(state.graph().await.flight_count(), 2);
    }
}
