// Assistant orchestrator - Classify, dispatch, respond
use crate::application::diagnostic_engine::DiagnosticEngine;
use crate::application::fault_detector::FaultDetector;
use crate::application::fleet_repository::FleetRepository;
use crate::application::intent_router::IntentRouter;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::fault::FaultAssessment;
use crate::domain::intent::Intent;
use crate::domain::rca::{RcaReport, RcaSummary};
use crate::domain::scheduling::{BookingConfirmation, BookingRequest, ServiceSlot};
use crate::domain::vehicle::FleetAlerts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Hint to the caller about a sensible follow-up; multi-turn continuity is
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    ScheduleService,
    ConfirmBooking,
    ViewRca,
}

/// Structured payload accompanying an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Diagnosis(Diagnosis),
    Assessment(FaultAssessment),
    Scheduling {
        #[serde(rename = "vehicleId")]
        vehicle_id: String,
        slots: Vec<ServiceSlot>,
    },
    Rca(RcaReport),
    Booking(BookingConfirmation),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    pub message: String,
    pub data: Option<ResponseData>,
    pub next_action: Option<NextAction>,
}

/// Composes the fault detector and diagnostic engine with the scheduling and
/// RCA collaborators into one response per user turn. Holds no state across
/// turns; every request is independent.
#[derive(Clone)]
pub struct AssistantService {
    repository: Arc<dyn FleetRepository>,
    router: IntentRouter,
    detector: FaultDetector,
    engine: DiagnosticEngine,
}

impl AssistantService {
    pub fn new(
        repository: Arc<dyn FleetRepository>,
        detector: FaultDetector,
        engine: DiagnosticEngine,
        router: IntentRouter,
    ) -> Self {
        Self {
            repository,
            router,
            detector,
            engine,
        }
    }

    /// One user turn: classify, dispatch, respond. External fetch failures
    /// degrade to "no data" responses; nothing here returns an error to the
    /// caller.
    pub async fn handle_user_turn(&self, input: &str) -> AssistantResponse {
        let intent = self.router.classify(input);
        let vehicle_id = self.router.extract_vehicle_id(input);
        tracing::debug!(?intent, %vehicle_id, "dispatching user turn");

        match intent {
            Intent::CheckVehicle => self.handle_vehicle_check(&vehicle_id).await,
            Intent::ScheduleService => self.handle_scheduling(vehicle_id).await,
            Intent::GetDiagnosis => self.handle_diagnosis(&vehicle_id).await,
            Intent::RcaRequest => self.handle_rca(&vehicle_id).await,
            Intent::General => Self::handle_general(),
        }
    }

    /// Fault evaluation for one vehicle, fetching its prediction first.
    pub async fn assess_vehicle(&self, vehicle_id: &str) -> FaultAssessment {
        let prediction = match self.repository.predict(vehicle_id).await {
            Ok(prediction) => prediction,
            Err(e) => {
                tracing::warn!(%vehicle_id, error = %e, "prediction fetch failed, treating as no data");
                None
            }
        };
        self.detector.assess(vehicle_id, prediction.as_ref())
    }

    /// Full diagnosis for one vehicle, via a fresh assessment.
    pub async fn diagnose_vehicle(&self, vehicle_id: &str) -> Diagnosis {
        let assessment = self.assess_vehicle(vehicle_id).await;
        self.diagnose_assessment(&assessment)
    }

    pub async fn fleet_alerts(&self) -> Option<FleetAlerts> {
        match self.repository.fleet_alerts().await {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!(error = %e, "fleet alerts fetch failed");
                None
            }
        }
    }

    pub async fn available_slots(&self, date: Option<&str>) -> Vec<ServiceSlot> {
        match self.repository.available_slots(date).await {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!(error = %e, "slot fetch failed, returning none");
                Vec::new()
            }
        }
    }

    /// Book a slot. Failures surface as a clearly labeled retry message,
    /// never a raw error.
    pub async fn book(&self, request: &BookingRequest) -> AssistantResponse {
        match self.repository.create_booking(request).await {
            Ok(Some(confirmation)) if confirmation.success => AssistantResponse {
                message: confirmation.message.clone(),
                data: Some(ResponseData::Booking(confirmation)),
                next_action: None,
            },
            Ok(_) => Self::booking_failed(),
            Err(e) => {
                tracing::warn!(error = %e, "booking request failed");
                Self::booking_failed()
            }
        }
    }

    pub async fn rca_report(&self, vehicle_id: &str) -> Option<RcaReport> {
        match self.repository.get_or_create_rca(vehicle_id).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(%vehicle_id, error = %e, "rca fetch failed");
                None
            }
        }
    }

    pub async fn rca_reports(&self) -> Vec<RcaSummary> {
        match self.repository.list_rca_reports().await {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!(error = %e, "rca list fetch failed");
                Vec::new()
            }
        }
    }

    async fn handle_vehicle_check(&self, vehicle_id: &str) -> AssistantResponse {
        let assessment = self.assess_vehicle(vehicle_id).await;

        if assessment.has_fault {
            let diagnosis = self.diagnose_assessment(&assessment);
            return AssistantResponse {
                message: format!(
                    "Vehicle {}: {} {}",
                    vehicle_id, diagnosis.summary, diagnosis.recommendation
                ),
                data: Some(ResponseData::Diagnosis(diagnosis)),
                next_action: Some(NextAction::ScheduleService),
            };
        }

        AssistantResponse {
            message: format!(
                "Vehicle {vehicle_id} is operating normally. All systems are healthy."
            ),
            data: Some(ResponseData::Assessment(assessment)),
            next_action: None,
        }
    }

    async fn handle_scheduling(&self, vehicle_id: String) -> AssistantResponse {
        let slots = self.available_slots(None).await;

        AssistantResponse {
            message: format!(
                "I found {} available slots. Would you like to book one?",
                slots.len()
            ),
            data: Some(ResponseData::Scheduling { vehicle_id, slots }),
            next_action: Some(NextAction::ConfirmBooking),
        }
    }

    async fn handle_diagnosis(&self, vehicle_id: &str) -> AssistantResponse {
        let assessment = self.assess_vehicle(vehicle_id).await;
        let diagnosis = self.diagnose_assessment(&assessment);

        AssistantResponse {
            message: diagnosis.detailed_explanation.clone(),
            data: Some(ResponseData::Diagnosis(diagnosis)),
            next_action: Some(NextAction::ScheduleService),
        }
    }

    async fn handle_rca(&self, vehicle_id: &str) -> AssistantResponse {
        match self.rca_report(vehicle_id).await {
            Some(report) => AssistantResponse {
                message: format!(
                    "RCA Report generated for vehicle {}. Root cause: {}",
                    vehicle_id, report.root_cause
                ),
                data: Some(ResponseData::Rca(report)),
                next_action: Some(NextAction::ViewRca),
            },
            None => AssistantResponse {
                message: format!(
                    "RCA report for vehicle {vehicle_id} is not available right now. Please try again later."
                ),
                data: None,
                next_action: None,
            },
        }
    }

    fn handle_general() -> AssistantResponse {
        AssistantResponse {
            message: "I can help you check vehicle health, schedule service, or provide \
                      diagnostics. What would you like to do?"
                .to_string(),
            data: None,
            next_action: None,
        }
    }

    fn diagnose_assessment(&self, assessment: &FaultAssessment) -> Diagnosis {
        // The prediction backend coerces a missing component to Engine
        let component = assessment.component.as_deref().unwrap_or("Engine");
        self.engine.diagnose(
            component,
            assessment.fault_probability,
            assessment.telemetry.as_ref(),
            &assessment.faults,
        )
    }

    fn booking_failed() -> AssistantResponse {
        AssistantResponse {
            message: "Booking failed. Please try again.".to_string(),
            data: None,
            next_action: None,
        }
    }
}
