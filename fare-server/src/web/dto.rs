//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{City, DomainError, Flight, Price};
use crate::planner::{FlightGraph, SearchOutcome};

/// A flight as it arrives over the wire.
///
/// Prices are read as any JSON number so that negative or fractional
/// values are reported as a validation error rather than a JSON type
/// error. The full `u64` range is accepted.
#[derive(Debug, Deserialize)]
pub struct FlightRecord {
    /// Departure city
    pub source: String,

    /// Arrival city
    pub destination: String,

    /// Price in the smallest currency unit
    pub price: serde_json::Number,
}

impl FlightRecord {
    /// Validate the record and convert it into a domain flight.
    pub fn into_flight(self) -> Result<Flight, DomainError> {
        let source = City::parse(&self.source)?;
        let destination = City::parse(&self.destination)?;
        let price = parse_price(&self.price)?;
        Ok(Flight::new(source, destination, price))
    }
}

fn parse_price(number: &serde_json::Number) -> Result<Price, DomainError> {
    if let Some(amount) = number.as_u64() {
        Ok(Price::new(amount))
    } else if let Some(amount) = number.as_i64() {
        Price::try_from_signed(amount)
    } else {
        Err(DomainError::InvalidPrice(number.to_string()))
    }
}

/// Request to replace the flight dataset.
#[derive(Debug, Deserialize)]
pub struct LoadFlightsRequest {
    /// Every flight offered for the day
    pub flights: Vec<FlightRecord>,
}

/// Size of the current flight graph.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Number of flights, parallel flights counted separately
    pub flights: usize,

    /// Number of cities with at least one departure
    pub origins: usize,

    /// Number of distinct cities
    pub cities: usize,
}

impl GraphSummary {
    pub fn from_graph(graph: &FlightGraph) -> Self {
        Self {
            flights: graph.flight_count(),
            origins: graph.origin_count(),
            cities: graph.city_count(),
        }
    }
}

/// Query parameters for a cheapest-fare lookup.
#[derive(Debug, Deserialize)]
pub struct CheapestQuery {
    /// Departure city
    pub from: String,

    /// Arrival city
    pub to: String,
}

/// Answer to a cheapest-fare lookup.
#[derive(Debug, Serialize)]
pub struct CheapestResponse {
    pub from: String,
    pub to: String,

    /// Cheapest total price, or null if unreachable
    pub cost: Option<u64>,

    /// Whether any route exists
    pub reachable: bool,

    /// Number of cities the search settled
    pub settled: usize,
}

impl CheapestResponse {
    pub fn from_outcome(from: &City, to: &City, outcome: &SearchOutcome) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            cost: outcome.cost.map(Price::amount),
            reachable: outcome.is_reachable(),
            settled: outcome.stats.settled,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::SearchStats;

    fn record(source: &str, destination: &str, price: i64) -> FlightRecord {
        FlightRecord {
            source: source.to_string(),
            destination: destination.to_string(),
            price: price.into(),
        }
    }

    #[test]
    fn valid_record_converts() {
        let flight = record("LHR", "JFK", 420).into_flight().unwrap();
        assert_eq!(flight.source().as_str(), "LHR");
        assert_eq!(flight.destination().as_str(), "JFK");
        assert_eq!(flight.price(), Price::new(420));
    }

    #[test]
    fn negative_price_rejected() {
        let err = record("LHR", "JFK", -1).into_flight().unwrap_err();
        assert_eq!(err, DomainError::NegativePrice(-1));
    }

    #[test]
    fn prices_above_i64_accepted() {
        let record: FlightRecord = serde_json::from_str(
            r#"{"source": "A", "destination": "B", "price": 18446744073709551615}"#,
        )
        .unwrap();
        assert_eq!(record.into_flight().unwrap().price(), Price::new(u64::MAX));
    }

    #[test]
    fn fractional_price_rejected() {
        let record: FlightRecord =
            serde_json::from_str(r#"{"source": "A", "destination": "B", "price": 12.5}"#)
                .unwrap();
        let err = record.into_flight().unwrap_err();
        assert_eq!(err, DomainError::InvalidPrice("12.5".to_string()));
    }

    #[test]
    fn blank_city_rejected() {
        let err = record(" ", "JFK", 1).into_flight().unwrap_err();
        assert!(matches!(err, DomainError::InvalidCity(_)));
    }

    #[test]
    fn summary_counts_graph() {
        let flights = vec![record("A", "B", 1), record("A", "B", 2), record("B", "C", 3)];
        let graph: FlightGraph = flights
            .into_iter()
            .map(|r| r.into_flight().unwrap())
            .collect();

        let summary = GraphSummary::from_graph(&graph);
        assert_eq!(summary.flights, 3);
        assert_eq!(summary.origins, 2);
        assert_eq!(summary.cities, 3);
    }

    #[test]
    fn unreachable_response_serializes_null_cost() {
        let from = City::parse("A").unwrap();
        let to = City::parse("E").unwrap();
        let outcome = SearchOutcome {
            cost: None,
            stats: SearchStats::default(),
        };

        let json = serde_json::to_value(CheapestResponse::from_outcome(&from, &to, &outcome))
            .unwrap();
        assert_eq!(json["cost"], serde_json::Value::Null);
        assert_eq!(json["reachable"], false);
        assert_eq!(json["from"], "A");
    }
}
