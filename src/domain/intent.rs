// User intent domain model

use serde::{Deserialize, Serialize};

/// What the user is asking for, derived per input with no lifecycle beyond
/// a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CheckVehicle,
    ScheduleService,
    GetDiagnosis,
    RcaRequest,
    General,
}
