//! HaulCheck API Server - Backend for driver verification
//!
//! Provides REST endpoints for:
//! - Geofence checks against pickup/delivery coordinates
//! - CDL number and expiration validation
//! - Face-match verification with staged progress
//! - Verification event retrieval

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("haulcheck_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing HaulCheck API...");
    let state = AppState::from_env();
    info!(
        "Geofence radius: {} ft",
        state.geofence_radius_feet
    );
    let state = Arc::new(state);

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Verification endpoints
        .route("/api/geofence/check", post(handlers::check_geofence))
        .route("/api/cdl/validate", post(handlers::validate_cdl))
        .route("/api/face/verify", post(handlers::verify_face))
        // Event retrieval
        .route("/api/events/:subject", get(handlers::get_events))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HaulCheck API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
