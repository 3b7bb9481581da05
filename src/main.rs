// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::device_service::DeviceService;
use crate::infrastructure::api_repository::ApiRepository;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(ApiRepository::new(&config.api)?);

    // Create services (application layer)
    let device_service = DeviceService::new(repository.clone());
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        device_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = build_router(state, &config.server)?;

    // Start server
    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!("Starting environment-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
