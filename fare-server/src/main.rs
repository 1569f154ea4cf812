use fare_server::config::ServerConfig;
use fare_server::planner::FlightGraph;
use fare_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fare_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(2);
        }
    };

    // Start with no flights; the dataset is loaded through PUT /flights
    let state = AppState::new(FlightGraph::new(), config.search.clone())
        .with_upload_limit(config.max_upload_bytes);
    let app = create_router(state);

    info!(
        addr = %config.addr,
        timeout_ms = config.search.timeout.map(|t| t.as_millis() as u64),
        max_settled = config.search.max_settled,
        max_upload_bytes = config.max_upload_bytes,
        "Fare server listening"
    );
    if config.search.is_unbounded() {
        warn!("Searches run without a deadline or settled-city cap");
    }
    info!("  GET  /health                 - Health check");
    info!("  PUT  /flights                - Replace the flight dataset");
    info!("  GET  /flights                - Current dataset size");
    info!("  GET  /cheapest?from=A&to=B   - Cheapest total price");

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server terminated unexpectedly");
        std::process::exit(1);
    }
}
