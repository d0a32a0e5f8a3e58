// Repository trait for fleet data access
use crate::domain::rca::{RcaReport, RcaSummary};
use crate::domain::scheduling::{BookingConfirmation, BookingRequest, ServiceSlot};
use crate::domain::vehicle::{FleetAlerts, Prediction};
use async_trait::async_trait;

/// External collaborators behind one seam: the prediction/telemetry source,
/// the scheduling backend and the RCA backend.
///
/// `Ok(None)` means the source had nothing for the request; callers treat it
/// as "no data", never as a failure.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Fleet-wide overview with per-vehicle risk entries.
    async fn fleet_alerts(&self) -> anyhow::Result<Option<FleetAlerts>>;

    /// Failure prediction plus current telemetry for one vehicle.
    async fn predict(&self, vehicle_id: &str) -> anyhow::Result<Option<Prediction>>;

    /// Service slots, optionally for a specific date (YYYY-MM-DD).
    async fn available_slots(&self, date: Option<&str>) -> anyhow::Result<Vec<ServiceSlot>>;

    /// Book a service slot.
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> anyhow::Result<Option<BookingConfirmation>>;

    /// Fetch or generate the root-cause-analysis record for a vehicle.
    async fn get_or_create_rca(&self, vehicle_id: &str) -> anyhow::Result<Option<RcaReport>>;

    /// List past RCA reports.
    async fn list_rca_reports(&self) -> anyhow::Result<Vec<RcaSummary>>;
}
