// Sample repository - In-process rendition of the mock fleet facade
use crate::application::fleet_repository::FleetRepository;
use crate::domain::rca::{Capa, RcaReport, RcaSummary};
use crate::domain::scheduling::{BookingConfirmation, BookingRequest, ServiceSlot};
use crate::domain::telemetry::TelemetryReading;
use crate::domain::vehicle::{FleetAlerts, Prediction, RiskLevel, VehicleAlert};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

struct SampleVehicle {
    id: &'static str,
    risk: RiskLevel,
    failure_probability: f64,
    component: Option<&'static str>,
    time_to_failure: &'static str,
}

const SAMPLE_FLEET: &[SampleVehicle] = &[
    SampleVehicle {
        id: "MH12AB1234",
        risk: RiskLevel::High,
        failure_probability: 0.85,
        component: Some("Engine"),
        time_to_failure: "2-3 days",
    },
    SampleVehicle {
        id: "DL05CD5678",
        risk: RiskLevel::Medium,
        failure_probability: 0.55,
        component: Some("Transmission"),
        time_to_failure: "7-10 days",
    },
    SampleVehicle {
        id: "KA03EF9012",
        risk: RiskLevel::Low,
        failure_probability: 0.15,
        component: None,
        time_to_failure: "30+ days",
    },
    SampleVehicle {
        id: "TN09GH3456",
        risk: RiskLevel::High,
        failure_probability: 0.78,
        component: Some("Cooling System"),
        time_to_failure: "3-5 days",
    },
    SampleVehicle {
        id: "GJ01IJ7890",
        risk: RiskLevel::Low,
        failure_probability: 0.22,
        component: None,
        time_to_failure: "30+ days",
    },
];

/// Serves the demo fleet without any network dependency: five fixed vehicles,
/// a lightly perturbed telemetry snapshot and canned scheduling/RCA data.
#[derive(Debug, Clone, Default)]
pub struct SampleRepository;

impl SampleRepository {
    pub fn new() -> Self {
        Self
    }

    /// Baseline snapshot with small jitter so repeated polls look live.
    fn sample_telemetry() -> TelemetryReading {
        let mut rng = rand::thread_rng();
        TelemetryReading::new(
            98.0 + rng.gen_range(-1.5..1.5),
            3500.0 + rng.gen_range(-150.0..150.0),
            35.0 + rng.gen_range(-1.0..1.0),
            12.2 + rng.gen_range(-0.15..0.15),
            4.2 + rng.gen_range(-0.2..0.2),
            75000.0,
        )
    }

    fn find_vehicle(vehicle_id: &str) -> &'static SampleVehicle {
        // Unknown ids fall back to the first sample vehicle, like the facade
        SAMPLE_FLEET
            .iter()
            .find(|v| v.id == vehicle_id)
            .unwrap_or(&SAMPLE_FLEET[0])
    }
}

#[async_trait]
impl FleetRepository for SampleRepository {
    async fn fleet_alerts(&self) -> anyhow::Result<Option<FleetAlerts>> {
        let vehicles: Vec<VehicleAlert> = SAMPLE_FLEET
            .iter()
            .map(|v| VehicleAlert {
                id: v.id.to_string(),
                risk: v.risk,
                failure_probability: v.failure_probability,
                component: v.component.map(ToString::to_string),
                time_to_failure: v.time_to_failure.to_string(),
            })
            .collect();

        Ok(Some(FleetAlerts {
            total_vehicles: vehicles.len(),
            active_alerts: vehicles
                .iter()
                .filter(|v| v.risk == RiskLevel::High || v.risk == RiskLevel::Medium)
                .count(),
            predicted_failures: vehicles.iter().filter(|v| v.risk == RiskLevel::High).count(),
            vehicles,
        }))
    }

    async fn predict(&self, vehicle_id: &str) -> anyhow::Result<Option<Prediction>> {
        let vehicle = Self::find_vehicle(vehicle_id);

        Ok(Some(Prediction {
            failure_probability: vehicle.failure_probability,
            component: Some(vehicle.component.unwrap_or("Engine").to_string()),
            time_to_failure: vehicle.time_to_failure.to_string(),
            risk: vehicle.risk,
            confidence: Some(0.92),
            telemetry: Self::sample_telemetry(),
        }))
    }

    async fn available_slots(&self, _date: Option<&str>) -> anyhow::Result<Vec<ServiceSlot>> {
        Ok(vec![
            ServiceSlot::new("09:00 AM", true),
            ServiceSlot::new("11:00 AM", true),
            ServiceSlot::new("02:00 PM", true),
            ServiceSlot::new("04:00 PM", false),
            ServiceSlot::new("05:00 PM", true),
        ])
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> anyhow::Result<Option<BookingConfirmation>> {
        Ok(Some(BookingConfirmation {
            success: true,
            booking_id: format!("BK{}", Utc::now().timestamp_millis()),
            vehicle_id: request.vehicle_id.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
            service_type: request.service_type.clone(),
            message: "Booking confirmed successfully".to_string(),
        }))
    }

    async fn get_or_create_rca(&self, vehicle_id: &str) -> anyhow::Result<Option<RcaReport>> {
        Ok(Some(RcaReport {
            vehicle_id: vehicle_id.to_string(),
            rca_id: format!("RCA{}", Utc::now().timestamp_millis()),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            component: "Engine Cooling System".to_string(),
            root_cause: "Coolant pump bearing wear due to extended operation beyond service interval"
                .to_string(),
            failure_description: "Abnormal vibration and overheating detected".to_string(),
            evidence: vec![
                "Vibration exceeded 4.5 mm/s".to_string(),
                "Temperature reached 105°C".to_string(),
                "Bearing clearance at 0.8mm".to_string(),
            ],
            capa: Capa {
                corrective: vec![
                    "Replace coolant pump".to_string(),
                    "Flush cooling system".to_string(),
                ],
                preventive: vec![
                    "Implement predictive maintenance".to_string(),
                    "Reduce service interval".to_string(),
                ],
            },
            manufacturing_insights: vec![
                "Bearing quality issue in batch #2023-Q3".to_string(),
                "Upgrade bearing specification recommended".to_string(),
            ],
        }))
    }

    async fn list_rca_reports(&self) -> anyhow::Result<Vec<RcaSummary>> {
        Ok(vec![
            RcaSummary {
                id: "RCA001".to_string(),
                vehicle_id: "MH12AB1234".to_string(),
                date: "2024-01-15".to_string(),
                component: "Engine Cooling System".to_string(),
            },
            RcaSummary {
                id: "RCA002".to_string(),
                vehicle_id: "DL05CD5678".to_string(),
                date: "2024-01-14".to_string(),
                component: "Transmission".to_string(),
            },
        ])
    }
}
