// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::performance_service::PerformanceService;
use crate::infrastructure::config::load_tracker_config;
use crate::infrastructure::http_backend::HttpPerformanceBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    daily_performance, dashboard, health_check, list_assignees, list_races, list_users,
    race_detail, race_members, race_ranking, race_table, race_trend, total_users, user_races,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("performance_tracker=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_tracker_config().context("Failed to load configuration")?;

    // Create backend client (infrastructure layer)
    let backend = Arc::new(HttpPerformanceBackend::new(
        config.backend.base_url.clone(),
        config.backend.timeout_secs,
    )?);

    // Create services (application layer)
    let performance_service = PerformanceService::new(backend, config.views.clone());

    // Create application state
    let state = Arc::new(AppState { performance_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(dashboard))
        .route("/api/races", get(list_races))
        .route("/api/races/table", get(race_table))
        .route("/api/races/:id", get(race_detail))
        .route("/api/races/:id/members", get(race_members))
        .route("/api/races/:id/ranking", get(race_ranking))
        .route("/api/trend", get(race_trend))
        .route("/api/users", get(list_users))
        .route("/api/users/total", get(total_users))
        .route("/api/users/assignees", get(list_assignees))
        .route("/api/users/:id/races", get(user_races))
        .route("/api/users/:id/races/:race_id/daily", get(daily_performance))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.bind_address();
    tracing::info!(
        "Starting performance-tracker on {} (backend {})",
        addr,
        config.backend.base_url
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}
