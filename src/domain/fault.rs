// Fault detection domain models
use super::telemetry::TelemetryReading;
use serde::{Deserialize, Serialize};

/// Monitored metric a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaultKind {
    Temperature,
    Vibration,
    OilPressure,
    Battery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Warning,
    Critical,
}

/// A single detected out-of-range telemetry condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultFinding {
    #[serde(rename = "type")]
    pub kind: FaultKind,
    pub severity: FindingSeverity,
    pub message: String,
    pub value: f64,
    pub threshold: f64,
}

impl FaultFinding {
    pub fn new(
        kind: FaultKind,
        severity: FindingSeverity,
        message: String,
        value: f64,
        threshold: f64,
    ) -> Self {
        Self {
            kind,
            severity,
            message,
            value,
            threshold,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == FindingSeverity::Critical
    }
}

/// Overall vehicle severity rolled up from findings and failure probability.
///
/// `Unknown` marks "no telemetry was available" so callers can tell it apart
/// from a genuinely healthy `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Caution,
    Warning,
    Critical,
    Unknown,
}

/// Result of one fault evaluation for a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultAssessment {
    pub vehicle_id: String,
    pub has_fault: bool,
    pub faults: Vec<FaultFinding>,
    pub fault_probability: f64,
    pub component: Option<String>,
    pub telemetry: Option<TelemetryReading>,
    pub severity: Severity,
}

impl FaultAssessment {
    /// Assessment for a vehicle with no telemetry available. Absence of data
    /// is not absence of risk, hence severity `Unknown` rather than `Normal`.
    pub fn no_data(vehicle_id: String) -> Self {
        Self {
            vehicle_id,
            has_fault: false,
            faults: Vec::new(),
            fault_probability: 0.0,
            component: None,
            telemetry: None,
            severity: Severity::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_serializes_type_field() {
        let finding = FaultFinding::new(
            FaultKind::OilPressure,
            FindingSeverity::Warning,
            "Oil pressure low: 33 PSI".to_string(),
            33.0,
            35.0,
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "oilPressure");
        assert_eq!(json["severity"], "warning");
    }

    #[test]
    fn test_no_data_assessment_is_distinguishable() {
        let assessment = FaultAssessment::no_data("MH12AB1234".to_string());
        assert!(!assessment.has_fault);
        assert!(assessment.faults.is_empty());
        assert_eq!(assessment.severity, Severity::Unknown);
        assert_ne!(assessment.severity, Severity::Normal);
    }
}
