//! Flight records.

use super::{City, Price};

/// A single direct flight offered for the day.
///
/// Flights are directed: a flight from `A` to `B` says nothing about
/// travelling from `B` to `A`. The city type defaults to [`City`] but any
/// hashable identifier works.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight<N = City> {
    source: N,
    destination: N,
    price: Price,
}

impl<N> Flight<N> {
    /// Create a flight.
    pub fn new(source: N, destination: N, price: Price) -> Self {
        Self {
            source,
            destination,
            price,
        }
    }

    /// Departure city.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Arrival city.
    pub fn destination(&self) -> &N {
        &self.destination
    }

    /// Fare for this flight alone.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Split the flight into its parts.
    pub fn into_parts(self) -> (N, N, Price) {
        (self.source, self.destination, self.price)
    }
}
