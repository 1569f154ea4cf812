//! Domain types for the fare search.
//!
//! This module contains the validated building blocks of a flight
//! dataset. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod city;
mod error;
mod flight;
mod price;

pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use flight::Flight;
pub use price::Price;
