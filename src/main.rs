use std::net::{Ipv4Addr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lol_esports_api::cargo_client::{CargoClient, DEFAULT_API_URL};
use lol_esports_api::routes;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // Client for the Leaguepedia Cargo API
    let api_url = std::env::var("LEAGUEPEDIA_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let client = CargoClient::new(api_url)
        .expect("Failed to build Leaguepedia client");

    tracing::info!("Leaguepedia client ready.");

    let host: Ipv4Addr = std::env::var("HOST")
        .expect("HOST must be set in .env")
        .parse()
        .expect("HOST is not in the correct format");

    let port: u16 = std::env::var("PORT")
        .expect("PORT must be set in .env")
        .parse()
        .expect("PORT is not the correct format");

    let addr = SocketAddr::from((host, port));

    let app = routes::app(client);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
