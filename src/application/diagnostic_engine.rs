// Diagnostic engine - Root-cause narratives from a static knowledge base
use crate::domain::diagnosis::{Diagnosis, DiagnosisSeverity, Urgency};
use crate::domain::fault::FaultFinding;
use crate::domain::telemetry::TelemetryReading;

/// Static per-component knowledge: known symptoms, causes in priority order
/// and the workshop diagnostic steps.
struct ComponentKnowledge {
    #[allow(dead_code)]
    symptoms: &'static [&'static str],
    causes: &'static [&'static str],
    diagnostic_steps: &'static [&'static str],
}

const ENGINE: ComponentKnowledge = ComponentKnowledge {
    symptoms: &["high temperature", "abnormal vibration", "power loss"],
    causes: &[
        "Coolant pump failure",
        "Thermostat malfunction",
        "Radiator blockage",
        "Engine bearing wear",
        "Piston ring damage",
    ],
    diagnostic_steps: &[
        "Check coolant level and quality",
        "Inspect coolant pump operation",
        "Test thermostat functionality",
        "Examine radiator for blockages",
        "Perform compression test",
    ],
};

const TRANSMISSION: ComponentKnowledge = ComponentKnowledge {
    symptoms: &["gear shifting delays", "fluid pressure drop", "unusual noise"],
    causes: &[
        "Transmission fluid degradation",
        "Clutch wear",
        "Solenoid failure",
        "Torque converter issues",
    ],
    diagnostic_steps: &[
        "Check transmission fluid level and condition",
        "Test solenoid operation",
        "Inspect clutch plates",
        "Scan for transmission codes",
    ],
};

const BATTERY: ComponentKnowledge = ComponentKnowledge {
    symptoms: &["voltage fluctuation", "slow cranking", "electrical issues"],
    causes: &[
        "Battery cell degradation",
        "Alternator failure",
        "Parasitic drain",
        "Corroded terminals",
    ],
    diagnostic_steps: &[
        "Load test battery",
        "Test alternator output",
        "Check for parasitic drain",
        "Inspect terminals and connections",
    ],
};

const COOLING_SYSTEM: ComponentKnowledge = ComponentKnowledge {
    symptoms: &["overheating", "coolant loss", "temperature spikes"],
    causes: &[
        "Coolant pump bearing wear",
        "Radiator leak",
        "Thermostat stuck",
        "Fan clutch failure",
    ],
    diagnostic_steps: &[
        "Pressure test cooling system",
        "Inspect pump for leaks and noise",
        "Check thermostat operation",
        "Test fan clutch engagement",
    ],
};

const BRAKES: ComponentKnowledge = ComponentKnowledge {
    symptoms: &["pad wear", "reduced stopping power", "noise"],
    causes: &[
        "Brake pad wear beyond limit",
        "Rotor damage",
        "Caliper seizure",
        "Brake fluid contamination",
    ],
    diagnostic_steps: &[
        "Measure pad thickness",
        "Inspect rotors for scoring",
        "Test caliper operation",
        "Check brake fluid condition",
    ],
};

fn knowledge_for(component: &str) -> Option<&'static ComponentKnowledge> {
    match component {
        "Engine" => Some(&ENGINE),
        "Transmission" => Some(&TRANSMISSION),
        "Battery" => Some(&BATTERY),
        "Cooling System" => Some(&COOLING_SYSTEM),
        "Brakes" => Some(&BRAKES),
        _ => None,
    }
}

fn repair_time_for(component: &str) -> &'static str {
    match component {
        "Engine" => "4-6 hours",
        "Transmission" => "3-5 hours",
        "Battery" => "1-2 hours",
        "Cooling System" => "2-4 hours",
        "Brakes" => "2-3 hours",
        _ => "2-4 hours",
    }
}

fn cost_for(component: &str) -> &'static str {
    match component {
        "Engine" => "$800-$1500",
        "Transmission" => "$600-$1200",
        "Battery" => "$150-$300",
        "Cooling System" => "$400-$800",
        "Brakes" => "$300-$600",
        _ => "$400-$800",
    }
}

/// Maps component + findings + failure probability to a full diagnosis.
/// Pure function of its inputs plus the static tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticEngine;

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn diagnose(
        &self,
        component: &str,
        fault_probability: f64,
        telemetry: Option<&TelemetryReading>,
        faults: &[FaultFinding],
    ) -> Diagnosis {
        let primary_cause = self.primary_cause(component, telemetry);
        let secondary_causes = self.secondary_causes(component);

        let summary = format!(
            "{} showing {:.1}% failure probability. {}.",
            component,
            fault_probability * 100.0,
            primary_cause
        );
        let detailed_explanation =
            self.detailed_explanation(component, &primary_cause, faults, telemetry);

        // Components without a knowledge-base entry borrow the Engine plan
        let diagnostic_plan = knowledge_for(component)
            .unwrap_or(&ENGINE)
            .diagnostic_steps
            .iter()
            .map(ToString::to_string)
            .collect();

        Diagnosis {
            component: component.to_string(),
            primary_cause,
            secondary_causes,
            summary,
            detailed_explanation,
            recommendation: self.recommendation(fault_probability, component),
            diagnostic_plan,
            severity: if fault_probability > 0.7 {
                DiagnosisSeverity::High
            } else if fault_probability > 0.4 {
                DiagnosisSeverity::Medium
            } else {
                DiagnosisSeverity::Low
            },
            urgency: self.urgency(fault_probability, faults),
            estimated_repair_time: repair_time_for(component).to_string(),
            estimated_cost: cost_for(component).to_string(),
        }
    }

    /// Component-specific rules in fixed priority order, falling back to the
    /// first knowledge-base cause when nothing matches.
    fn primary_cause(&self, component: &str, telemetry: Option<&TelemetryReading>) -> String {
        let Some(knowledge) = knowledge_for(component) else {
            return "Unknown component issue".to_string();
        };

        if let Some(t) = telemetry {
            match component {
                "Engine" => {
                    if t.temperature > 100.0 && t.vibration > 4.0 {
                        return "Coolant pump bearing failure causing overheating and vibration"
                            .to_string();
                    } else if t.temperature > 100.0 {
                        return "Cooling system malfunction - likely thermostat or radiator issue"
                            .to_string();
                    } else if t.vibration > 4.0 {
                        return "Engine bearing wear or mounting issue".to_string();
                    }
                }
                "Transmission" => {
                    if t.oil_pressure < 35.0 {
                        return "Transmission fluid pressure loss - pump or solenoid failure"
                            .to_string();
                    }
                }
                "Battery" => {
                    if t.battery_voltage < 12.0 {
                        return "Battery cell degradation or alternator failure".to_string();
                    }
                }
                _ => {}
            }
        }

        knowledge.causes[0].to_string()
    }

    /// Up to two static causes beyond the primary.
    fn secondary_causes(&self, component: &str) -> Vec<String> {
        knowledge_for(component)
            .map(|k| k.causes.iter().skip(1).take(2).map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn detailed_explanation(
        &self,
        component: &str,
        cause: &str,
        faults: &[FaultFinding],
        telemetry: Option<&TelemetryReading>,
    ) -> String {
        let mut explanation = format!("Analysis of {component} indicates: {cause}.\n\n");

        explanation.push_str("Evidence:\n");
        for fault in faults {
            explanation.push_str(&format!("- {}\n", fault.message));
        }

        explanation.push_str("\nTelemetry readings:\n");
        if let Some(t) = telemetry {
            explanation.push_str(&format!("- temperature: {}\n", t.temperature));
            explanation.push_str(&format!("- rpm: {}\n", t.rpm));
            explanation.push_str(&format!("- oilPressure: {}\n", t.oil_pressure));
            explanation.push_str(&format!("- batteryVoltage: {}\n", t.battery_voltage));
            explanation.push_str(&format!("- vibration: {}\n", t.vibration));
            // Prediction payloads omit mileage
            if t.mileage > 0.0 {
                explanation.push_str(&format!("- mileage: {}\n", t.mileage));
            }
        }

        explanation
    }

    fn recommendation(&self, probability: f64, component: &str) -> String {
        if probability > 0.8 {
            format!(
                "URGENT: Schedule immediate service for {component}. Vehicle should not be operated until inspected."
            )
        } else if probability > 0.6 {
            format!(
                "Schedule service within 24-48 hours to prevent {component} failure and potential breakdown."
            )
        } else if probability > 0.4 {
            format!("Schedule service within 1 week. Monitor {component} closely for any changes.")
        } else {
            format!(
                "Continue regular maintenance schedule. {component} is within acceptable parameters."
            )
        }
    }

    fn urgency(&self, probability: f64, faults: &[FaultFinding]) -> Urgency {
        let has_critical = faults.iter().any(FaultFinding::is_critical);

        if has_critical || probability > 0.8 {
            Urgency::Immediate
        } else if probability > 0.6 {
            Urgency::High
        } else if probability > 0.4 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fault_detector::FaultDetector;
    use crate::infrastructure::config::Thresholds;

    fn engine_case_telemetry() -> TelemetryReading {
        TelemetryReading::new(102.0, 3500.0, 40.0, 12.6, 4.2, 75000.0)
    }

    #[test]
    fn test_engine_combined_overheating_and_vibration() {
        let engine = DiagnosticEngine::new();
        let telemetry = engine_case_telemetry();
        let faults = FaultDetector::new(Thresholds::default()).evaluate(&telemetry);

        let diagnosis = engine.diagnose("Engine", 0.85, Some(&telemetry), &faults);

        assert_eq!(
            diagnosis.primary_cause,
            "Coolant pump bearing failure causing overheating and vibration"
        );
        assert_eq!(diagnosis.severity, DiagnosisSeverity::High);
        assert_eq!(diagnosis.urgency, Urgency::Immediate);
    }

    #[test]
    fn test_engine_overheating_alone() {
        let engine = DiagnosticEngine::new();
        let telemetry = TelemetryReading::new(102.0, 3500.0, 40.0, 12.6, 2.0, 75000.0);
        let diagnosis = engine.diagnose("Engine", 0.5, Some(&telemetry), &[]);
        assert_eq!(
            diagnosis.primary_cause,
            "Cooling system malfunction - likely thermostat or radiator issue"
        );
        assert_eq!(diagnosis.severity, DiagnosisSeverity::Medium);
    }

    #[test]
    fn test_transmission_pressure_rule() {
        let engine = DiagnosticEngine::new();
        let telemetry = TelemetryReading::new(90.0, 3000.0, 32.0, 12.6, 2.0, 60000.0);
        let diagnosis = engine.diagnose("Transmission", 0.55, Some(&telemetry), &[]);
        assert_eq!(
            diagnosis.primary_cause,
            "Transmission fluid pressure loss - pump or solenoid failure"
        );
        assert_eq!(diagnosis.estimated_repair_time, "3-5 hours");
        assert_eq!(diagnosis.estimated_cost, "$600-$1200");
    }

    #[test]
    fn test_no_rule_match_falls_back_to_first_cause() {
        let engine = DiagnosticEngine::new();
        let telemetry = TelemetryReading::new(90.0, 3000.0, 40.0, 12.6, 2.0, 60000.0);
        let diagnosis = engine.diagnose("Brakes", 0.3, Some(&telemetry), &[]);
        assert_eq!(diagnosis.primary_cause, "Brake pad wear beyond limit");
        assert_eq!(
            diagnosis.secondary_causes,
            vec!["Rotor damage".to_string(), "Caliper seizure".to_string()]
        );
    }

    #[test]
    fn test_unknown_component_fallback() {
        let engine = DiagnosticEngine::new();
        let diagnosis = engine.diagnose("Flux Capacitor", 0.5, None, &[]);
        assert_eq!(diagnosis.primary_cause, "Unknown component issue");
        assert!(diagnosis.secondary_causes.is_empty());
        // Plan borrows the Engine entry; estimates use the defaults
        assert_eq!(diagnosis.diagnostic_plan[0], "Check coolant level and quality");
        assert_eq!(diagnosis.estimated_repair_time, "2-4 hours");
        assert_eq!(diagnosis.estimated_cost, "$400-$800");
    }

    #[test]
    fn test_diagnose_is_idempotent() {
        let engine = DiagnosticEngine::new();
        let telemetry = engine_case_telemetry();
        let faults = FaultDetector::new(Thresholds::default()).evaluate(&telemetry);
        let first = engine.diagnose("Engine", 0.85, Some(&telemetry), &faults);
        let second = engine.diagnose("Engine", 0.85, Some(&telemetry), &faults);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommendation_bands() {
        let engine = DiagnosticEngine::new();
        let urgent = engine.diagnose("Battery", 0.9, None, &[]);
        assert!(urgent.recommendation.starts_with("URGENT"));
        let soon = engine.diagnose("Battery", 0.65, None, &[]);
        assert!(soon.recommendation.contains("24-48 hours"));
        let week = engine.diagnose("Battery", 0.45, None, &[]);
        assert!(week.recommendation.contains("within 1 week"));
        let routine = engine.diagnose("Battery", 0.2, None, &[]);
        assert!(routine.recommendation.contains("regular maintenance"));
    }

    #[test]
    fn test_critical_finding_forces_immediate_urgency() {
        let engine = DiagnosticEngine::new();
        let telemetry = TelemetryReading::new(106.0, 3500.0, 40.0, 12.6, 2.0, 75000.0);
        let faults = FaultDetector::new(Thresholds::default()).evaluate(&telemetry);
        let diagnosis = engine.diagnose("Engine", 0.3, Some(&telemetry), &faults);
        assert_eq!(diagnosis.urgency, Urgency::Immediate);
        // Severity stays a function of probability alone
        assert_eq!(diagnosis.severity, DiagnosisSeverity::Low);
    }

    #[test]
    fn test_detailed_explanation_lists_evidence_and_readings() {
        let engine = DiagnosticEngine::new();
        let telemetry = engine_case_telemetry();
        let faults = FaultDetector::new(Thresholds::default()).evaluate(&telemetry);
        let diagnosis = engine.diagnose("Engine", 0.85, Some(&telemetry), &faults);
        assert!(diagnosis
            .detailed_explanation
            .contains("- Engine temperature elevated: 102°C"));
        assert!(diagnosis.detailed_explanation.contains("- oilPressure: 40"));
        assert!(diagnosis.detailed_explanation.contains("- mileage: 75000"));
    }
}
