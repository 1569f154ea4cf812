//! Domain error types.
//!
//! These errors represent validation failures for flight data arriving
//! from outside the crate. They are distinct from search and HTTP errors.

use super::InvalidCity;

/// Domain-level errors for validating flight records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A price was below zero
    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),

    /// A price was not a whole number of currency units
    #[error("price must be a whole number, got {0}")]
    InvalidPrice(String),

    /// A city token failed validation
    #[error(transparent)]
    InvalidCity(#[from] InvalidCity),
}
