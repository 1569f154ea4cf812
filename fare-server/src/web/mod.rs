//! Web layer for the fare search.
//!
//! Provides HTTP endpoints for loading the day's flights and asking for
//! the cheapest price between two cities.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, DEFAULT_MAX_UPLOAD_BYTES};
