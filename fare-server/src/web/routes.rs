//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Query, State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::City;
use crate::planner::{FlightGraph, Planner, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// A whole day's flights arrive in one `PUT /flights` body, so that route
/// takes its size limit from the state instead of axum's 2 MB default.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health))
        .route(
            "/flights",
            get(graph_summary).put(load_flights).layer(upload_limit),
        )
        .route("/cheapest", get(cheapest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Describe the flight graph queries currently run against.
async fn graph_summary(State(state): State<AppState>) -> Json<GraphSummary> {
    let graph = state.graph().await;
    Json(GraphSummary::from_graph(&graph))
}

/// Replace the flight dataset.
///
/// The whole batch is validated before anything is swapped in; one bad
/// record rejects the request and leaves the current graph in place.
async fn load_flights(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GraphSummary>, AppError> {
    let body = body.map_err(AppError::from)?;

    // Parse JSON manually so the error names the problem
    let req: LoadFlightsRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        })?;

    let flights = req
        .flights
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record.into_flight().map_err(|e| AppError::BadRequest {
                message: format!("Invalid flight at index {idx}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let graph = FlightGraph::build(flights);
    let summary = GraphSummary::from_graph(&graph);
    let previous = state.replace_graph(graph).await;

    info!(
        flights = summary.flights,
        origins = summary.origins,
        cities = summary.cities,
        replaced_flights = previous.flight_count(),
        "Loaded flight graph"
    );

    Ok(Json(summary))
}

/// Look up the cheapest total price between two cities.
async fn cheapest(
    State(state): State<AppState>,
    Query(query): Query<CheapestQuery>,
) -> Result<Json<CheapestResponse>, AppError> {
    let from = City::parse(&query.from).map_err(|e| AppError::BadRequest {
        message: format!("Invalid origin {:?}: {e}", query.from),
    })?;
    let to = City::parse(&query.to).map_err(|e| AppError::BadRequest {
        message: format!("Invalid destination {:?}: {e}", query.to),
    })?;

    let graph = state.graph().await;
    let config = Arc::clone(&state.config);

    // The search is CPU-bound; keep it off the async workers
    let (from, to, result) = tokio::task::spawn_blocking(move || {
        let result = Planner::new(&*graph, &config).search(&from, &to);
        (from, to, result)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Search task failed: {e}"),
    })?;

    let outcome = result?;
    Ok(Json(CheapestResponse::from_outcome(&from, &to, &outcome)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Unavailable {
            message: e.to_string(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        let message = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge {
                message: format!("Flight dataset too large: {message}"),
            }
        } else {
            AppError::BadRequest { message }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = %status, "{message}");
        } else {
            warn!(status = %status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
