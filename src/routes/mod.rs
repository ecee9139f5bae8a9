use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cargo_client::CargoClient;

pub mod health;
pub mod regions;
pub mod tournaments;
pub mod years;

/// Builds the application router.
pub fn app(client: CargoClient) -> Router {
    // CORS configuration for NextJS frontend
    let cors = CorsLayer::new()
        .allow_origin(Any) // In production, use specific origins
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "LoL Match Visualizer API" }))
        .route("/health", get(health::health_check))

        // Metadata endpoints
        .route("/api/regions", get(regions::get_regions))
        .route("/api/years", get(years::get_years))
        .route("/api/tournaments", get(tournaments::get_tournaments))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
