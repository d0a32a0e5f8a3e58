// Root-cause-analysis domain models
use serde::{Deserialize, Serialize};

/// Corrective and preventive actions attached to an RCA record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capa {
    pub corrective: Vec<String>,
    pub preventive: Vec<String>,
}

/// Full root-cause-analysis record for one vehicle failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcaReport {
    pub vehicle_id: String,
    pub rca_id: String,
    pub date: String,
    pub component: String,
    pub root_cause: String,
    pub failure_description: String,
    pub evidence: Vec<String>,
    pub capa: Capa,
    pub manufacturing_insights: Vec<String>,
}

/// List-view entry for past RCA reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcaSummary {
    pub id: String,
    pub vehicle_id: String,
    pub date: String,
    pub component: String,
}
