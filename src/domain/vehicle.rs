// Vehicle and fleet domain models
use super::telemetry::TelemetryReading;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// One vehicle entry in the fleet overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAlert {
    pub id: String,
    pub risk: RiskLevel,
    pub failure_probability: f64,
    pub component: Option<String>,
    pub time_to_failure: String,
}

/// Fleet-wide overview as served by the alerts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAlerts {
    pub total_vehicles: usize,
    pub active_alerts: usize,
    pub predicted_failures: usize,
    pub vehicles: Vec<VehicleAlert>,
}

/// Failure prediction for one vehicle, sourced from the prediction backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub failure_probability: f64,
    pub component: Option<String>,
    pub time_to_failure: String,
    pub risk: RiskLevel,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub telemetry: TelemetryReading,
}
