//! Fare amounts.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A non-negative fare in the smallest currency unit.
///
/// Prices are unsigned, so a graph built from `Price` values can never
/// contain the negative edges that would break cheapest-path search.
/// Addition saturates at `u64::MAX` instead of wrapping.
///
/// # Examples
///
/// ```
/// use fare_server::domain::Price;
///
/// let total = Price::new(100) + Price::new(40);
/// assert_eq!(total.amount(), 140);
///
/// assert!(Price::try_from_signed(-1).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The price of not travelling at all.
    pub const ZERO: Price = Price(0);

    /// Create a price from an amount.
    pub const fn new(amount: u64) -> Self {
        Price(amount)
    }

    /// Convert a signed amount, rejecting negative values.
    pub fn try_from_signed(amount: i64) -> Result<Self, DomainError> {
        u64::try_from(amount)
            .map(Price)
            .map_err(|_| DomainError::NegativePrice(amount))
    }

    /// Returns the amount.
    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Price(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition() {
        assert_eq!(Price::new(100) + Price::new(40), Price::new(140));
        assert_eq!(Price::ZERO + Price::new(7), Price::new(7));
    }

    #[test]
    fn addition_saturates() {
        let max = Price::new(u64::MAX);
        assert_eq!(max + Price::new(1), max);
    }

    #[test]
    fn ordering() {
        assert!(Price::new(1) < Price::new(2));
        assert!(Price::ZERO < Price::new(1));
    }

    #[test]
    fn signed_conversion() {
        assert_eq!(Price::try_from_signed(0).unwrap(), Price::ZERO);
        assert_eq!(Price::try_from_signed(250).unwrap(), Price::new(250));
        assert!(matches!(
            Price::try_from_signed(-5),
            Err(DomainError::NegativePrice(-5))
        ));
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&Price::new(260)).unwrap(), "260");
        let price: Price = serde_json::from_str("42").unwrap();
        assert_eq!(price.amount(), 42);
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Price::new(350).to_string(), "350");
    }
}
