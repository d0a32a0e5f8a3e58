// HTTP request handlers
use crate::application::assistant_service::AssistantResponse;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::fault::FaultAssessment;
use crate::domain::rca::RcaSummary;
use crate::domain::scheduling::{BookingRequest, ServiceSlot};
use crate::domain::vehicle::FleetAlerts;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SlotQuery {
    pub date: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// One assistant turn: free text in, message + payload + next-action out.
pub async fn assistant_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MessageRequest>,
) -> Json<AssistantResponse> {
    Json(state.assistant.handle_user_turn(&request.text).await)
}

/// Fleet-wide overview. Degrades to an empty overview when the data source
/// has nothing.
pub async fn fleet_alerts(State(state): State<Arc<AppState>>) -> Json<FleetAlerts> {
    Json(state.assistant.fleet_alerts().await.unwrap_or(FleetAlerts {
        total_vehicles: 0,
        active_alerts: 0,
        predicted_failures: 0,
        vehicles: Vec::new(),
    }))
}

/// Fault findings and rolled-up severity for one vehicle.
pub async fn vehicle_faults(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<FaultAssessment> {
    Json(state.assistant.assess_vehicle(&id).await)
}

/// Full diagnosis for one vehicle.
pub async fn vehicle_diagnosis(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Diagnosis> {
    Json(state.assistant.diagnose_vehicle(&id).await)
}

/// Root-cause-analysis record for one vehicle.
pub async fn vehicle_rca(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.assistant.rca_report(&id).await {
        Some(report) => Json(report).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// List past RCA reports.
pub async fn list_rca_reports(State(state): State<Arc<AppState>>) -> Json<Vec<RcaSummary>> {
    Json(state.assistant.rca_reports().await)
}

/// Available service slots, optionally for a date.
pub async fn list_slots(
    Query(query): Query<SlotQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ServiceSlot>> {
    Json(state.assistant.available_slots(query.date.as_deref()).await)
}

/// Book a service slot.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Json<AssistantResponse> {
    Json(state.assistant.book(&request).await)
}
