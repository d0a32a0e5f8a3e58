// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::assistant_service::AssistantService;
use crate::application::diagnostic_engine::DiagnosticEngine;
use crate::application::fault_detector::FaultDetector;
use crate::application::fleet_repository::FleetRepository;
use crate::application::intent_router::IntentRouter;
use crate::infrastructure::config::{load_service_config, load_thresholds};
use crate::infrastructure::sample_repository::SampleRepository;
use crate::infrastructure::upstream_repository::UpstreamRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    assistant_message, create_booking, fleet_alerts, health_check, list_rca_reports, list_slots,
    vehicle_diagnosis, vehicle_faults, vehicle_rca,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let service_config = load_service_config()?;
    let thresholds = load_thresholds()?;

    // Pick the data source (infrastructure layer)
    let repository: Arc<dyn FleetRepository> = if service_config.upstream.enabled {
        tracing::info!(base_url = %service_config.upstream.base_url, "using upstream fleet API");
        Arc::new(UpstreamRepository::new(
            service_config.upstream.base_url.clone(),
            Duration::from_secs(service_config.upstream.timeout_secs),
        )?)
    } else {
        tracing::info!("using built-in sample fleet");
        Arc::new(SampleRepository::new())
    };

    // Wire up the assistant (application layer)
    let assistant = AssistantService::new(
        repository,
        FaultDetector::new(thresholds),
        DiagnosticEngine::new(),
        IntentRouter::new(),
    );

    let state = Arc::new(AppState { assistant });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/assistant/message", post(assistant_message))
        .route("/alerts", get(fleet_alerts))
        .route("/vehicles/:id/faults", get(vehicle_faults))
        .route("/vehicles/:id/diagnosis", get(vehicle_diagnosis))
        .route("/vehicles/:id/rca", get(vehicle_rca))
        .route("/rca", get(list_rca_reports))
        .route("/slots", get(list_slots))
        .route("/bookings", post(create_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        service_config.server.host, service_config.server.port
    )
    .parse()?;
    tracing::info!("Starting fleet-assistant service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
