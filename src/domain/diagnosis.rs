// Diagnosis domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisSeverity {
    High,
    Medium,
    Low,
}

/// Recommended response speed, distinct from severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Immediate,
    High,
    Medium,
    Low,
}

/// Root-cause narrative for one component, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub component: String,
    pub primary_cause: String,
    pub secondary_causes: Vec<String>,
    pub summary: String,
    pub detailed_explanation: String,
    pub recommendation: String,
    pub diagnostic_plan: Vec<String>,
    pub severity: DiagnosisSeverity,
    pub urgency: Urgency,
    pub estimated_repair_time: String,
    pub estimated_cost: String,
}
