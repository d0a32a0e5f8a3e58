// Fault detector - Threshold evaluation and severity rollup
use crate::domain::fault::{
    FaultAssessment, FaultFinding, FaultKind, FindingSeverity, Severity,
};
use crate::domain::telemetry::TelemetryReading;
use crate::domain::vehicle::Prediction;
use crate::infrastructure::config::Thresholds;

/// Evaluates telemetry against static thresholds. Pure over its inputs; the
/// thresholds are loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct FaultDetector {
    thresholds: Thresholds,
}

impl FaultDetector {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate one reading in fixed order: temperature, vibration, oil
    /// pressure, battery voltage. Critical is checked before warning, so a
    /// metric yields at most one finding.
    pub fn evaluate(&self, telemetry: &TelemetryReading) -> Vec<FaultFinding> {
        let mut faults = Vec::new();
        let t = &self.thresholds;

        if telemetry.temperature > t.temperature.critical {
            faults.push(FaultFinding::new(
                FaultKind::Temperature,
                FindingSeverity::Critical,
                format!(
                    "Engine temperature critically high: {}°C",
                    telemetry.temperature
                ),
                telemetry.temperature,
                t.temperature.critical,
            ));
        } else if telemetry.temperature > t.temperature.max {
            faults.push(FaultFinding::new(
                FaultKind::Temperature,
                FindingSeverity::Warning,
                format!("Engine temperature elevated: {}°C", telemetry.temperature),
                telemetry.temperature,
                t.temperature.max,
            ));
        }

        if telemetry.vibration > t.vibration.critical {
            faults.push(FaultFinding::new(
                FaultKind::Vibration,
                FindingSeverity::Critical,
                format!("Abnormal vibration detected: {} mm/s", telemetry.vibration),
                telemetry.vibration,
                t.vibration.critical,
            ));
        } else if telemetry.vibration > t.vibration.max {
            faults.push(FaultFinding::new(
                FaultKind::Vibration,
                FindingSeverity::Warning,
                format!("Elevated vibration: {} mm/s", telemetry.vibration),
                telemetry.vibration,
                t.vibration.max,
            ));
        }

        if telemetry.oil_pressure < t.oil_pressure.critical {
            faults.push(FaultFinding::new(
                FaultKind::OilPressure,
                FindingSeverity::Critical,
                format!("Oil pressure critically low: {} PSI", telemetry.oil_pressure),
                telemetry.oil_pressure,
                t.oil_pressure.critical,
            ));
        } else if telemetry.oil_pressure < t.oil_pressure.min {
            faults.push(FaultFinding::new(
                FaultKind::OilPressure,
                FindingSeverity::Warning,
                format!("Oil pressure low: {} PSI", telemetry.oil_pressure),
                telemetry.oil_pressure,
                t.oil_pressure.min,
            ));
        }

        if telemetry.battery_voltage < t.battery_voltage.critical {
            faults.push(FaultFinding::new(
                FaultKind::Battery,
                FindingSeverity::Critical,
                format!(
                    "Battery voltage critically low: {}V",
                    telemetry.battery_voltage
                ),
                telemetry.battery_voltage,
                t.battery_voltage.critical,
            ));
        } else if telemetry.battery_voltage < t.battery_voltage.min {
            faults.push(FaultFinding::new(
                FaultKind::Battery,
                FindingSeverity::Warning,
                format!("Battery voltage low: {}V", telemetry.battery_voltage),
                telemetry.battery_voltage,
                t.battery_voltage.min,
            ));
        }

        faults
    }

    /// Severity rollup: a pure function of the findings and the externally
    /// supplied failure probability.
    pub fn rollup(&self, faults: &[FaultFinding], failure_probability: f64) -> Severity {
        let has_critical = faults.iter().any(FaultFinding::is_critical);

        if has_critical || failure_probability > 0.8 {
            Severity::Critical
        } else if !faults.is_empty() || failure_probability > 0.5 {
            Severity::Warning
        } else if failure_probability > 0.3 {
            Severity::Caution
        } else {
            Severity::Normal
        }
    }

    /// Build the full assessment for a vehicle. A missing prediction degrades
    /// to a distinguishable "no data" assessment instead of an error.
    pub fn assess(&self, vehicle_id: &str, prediction: Option<&Prediction>) -> FaultAssessment {
        let Some(prediction) = prediction else {
            return FaultAssessment::no_data(vehicle_id.to_string());
        };

        let faults = self.evaluate(&prediction.telemetry);
        let severity = self.rollup(&faults, prediction.failure_probability);

        FaultAssessment {
            vehicle_id: vehicle_id.to_string(),
            has_fault: !faults.is_empty() || prediction.failure_probability > 0.5,
            faults,
            fault_probability: prediction.failure_probability,
            component: prediction.component.clone(),
            telemetry: Some(prediction.telemetry),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::RiskLevel;

    fn detector() -> FaultDetector {
        FaultDetector::new(Thresholds::default())
    }

    fn reading(temperature: f64, vibration: f64) -> TelemetryReading {
        TelemetryReading::new(temperature, 3000.0, 40.0, 12.6, vibration, 50000.0)
    }

    #[test]
    fn test_temperature_above_critical_bound() {
        let faults = detector().evaluate(&reading(106.0, 2.0));
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].kind, FaultKind::Temperature);
        assert_eq!(faults[0].severity, FindingSeverity::Critical);
        assert_eq!(faults[0].threshold, 105.0);
    }

    #[test]
    fn test_temperature_in_warning_band() {
        let faults = detector().evaluate(&reading(102.0, 2.0));
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].severity, FindingSeverity::Warning);
        assert_eq!(faults[0].message, "Engine temperature elevated: 102°C");
    }

    #[test]
    fn test_at_most_one_finding_per_metric() {
        // 110 exceeds both bounds; only the critical finding may be emitted
        let faults = detector().evaluate(&reading(110.0, 5.0));
        let temp_findings: Vec<_> = faults
            .iter()
            .filter(|f| f.kind == FaultKind::Temperature)
            .collect();
        assert_eq!(temp_findings.len(), 1);
        assert!(temp_findings[0].is_critical());
        let vib_findings: Vec<_> = faults
            .iter()
            .filter(|f| f.kind == FaultKind::Vibration)
            .collect();
        assert_eq!(vib_findings.len(), 1);
    }

    #[test]
    fn test_evaluation_order_is_fixed() {
        let telemetry = TelemetryReading::new(106.0, 3000.0, 28.0, 11.0, 5.0, 50000.0);
        let kinds: Vec<FaultKind> = detector()
            .evaluate(&telemetry)
            .into_iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                FaultKind::Temperature,
                FaultKind::Vibration,
                FaultKind::OilPressure,
                FaultKind::Battery
            ]
        );
    }

    #[test]
    fn test_healthy_reading_yields_no_findings() {
        assert!(detector().evaluate(&reading(90.0, 2.0)).is_empty());
    }

    #[test]
    fn test_rollup_probability_alone_drives_severity() {
        let d = detector();
        assert_eq!(d.rollup(&[], 0.85), Severity::Critical);
        assert_eq!(d.rollup(&[], 0.6), Severity::Warning);
        assert_eq!(d.rollup(&[], 0.35), Severity::Caution);
        assert_eq!(d.rollup(&[], 0.1), Severity::Normal);
    }

    #[test]
    fn test_rollup_critical_finding_overrides_low_probability() {
        let d = detector();
        let faults = d.evaluate(&reading(110.0, 2.0));
        assert_eq!(d.rollup(&faults, 0.1), Severity::Critical);
    }

    #[test]
    fn test_rollup_warning_finding_with_low_probability() {
        let d = detector();
        let faults = d.evaluate(&reading(102.0, 2.0));
        assert_eq!(d.rollup(&faults, 0.1), Severity::Warning);
    }

    #[test]
    fn test_assess_without_prediction_degrades_to_no_data() {
        let assessment = detector().assess("MH12AB1234", None);
        assert!(!assessment.has_fault);
        assert!(assessment.faults.is_empty());
        assert_eq!(assessment.severity, Severity::Unknown);
        assert!(assessment.telemetry.is_none());
    }

    #[test]
    fn test_assess_flags_fault_on_probability_without_findings() {
        let prediction = Prediction {
            failure_probability: 0.55,
            component: Some("Transmission".to_string()),
            time_to_failure: "7-10 days".to_string(),
            risk: RiskLevel::Medium,
            confidence: Some(0.92),
            telemetry: reading(90.0, 2.0),
        };
        let assessment = detector().assess("DL05CD5678", Some(&prediction));
        assert!(assessment.has_fault);
        assert!(assessment.faults.is_empty());
        assert_eq!(assessment.severity, Severity::Warning);
    }
}
