//! Clinic Scheduler Backend
//!
//! A small REST backend for a doctor directory and appointment booking,
//! backed by in-memory collections that live as long as the process.

mod api;
mod booking;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::{Repository, Tables};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!("Starting Clinic Scheduler Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the store
    let tables = if config.seed_data {
        Tables::seeded()
    } else {
        tracing::warn!("Seed data disabled (CLINIC_SEED_DATA). Starting with an empty store");
        Tables::empty()
    };
    let repo = Arc::new(Repository::new(tables));

    let counts = repo.counts().await;
    tracing::info!(
        doctors = counts.doctors,
        locations = counts.locations,
        availability = counts.availability,
        appointments = counts.appointments,
        "Store ready"
    );

    // Create application state
    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Doctors
        .route("/doctors", get(api::list_doctors))
        .route("/doctors", post(api::create_doctor))
        .route("/doctors/{id}", get(api::get_doctor))
        .route("/doctors/{id}/locations", get(api::list_doctor_locations))
        // Appointments
        .route("/appointment", post(api::create_appointment))
        .route("/appointments", delete(api::cancel_appointment))
        .route("/appointments/{doctor_id}", get(api::list_appointments));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
