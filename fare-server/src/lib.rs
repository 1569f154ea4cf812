//! Cheapest-fare server.
//!
//! Loads a day's flights into a graph and answers: "what is the cheapest
//! total price from this city to that one, combining any flights?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
