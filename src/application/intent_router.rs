// Intent router - Keyword classification and vehicle-id extraction
use crate::domain::intent::Intent;
use regex::Regex;

/// Registration-plate shape: two letters, two digits, two letters, four digits.
const PLATE_PATTERN: &str = r"(?i)\b[A-Za-z]{2}\d{2}[A-Za-z]{2}\d{4}\b";

/// Fallback id when no vehicle can be extracted from the input. Known
/// weakness: it silently attributes the request to a sample vehicle, so every
/// use is logged at warn level.
pub const DEFAULT_VEHICLE_ID: &str = "MH12AB1234";

/// Classifies free text into one intent via case-insensitive substring
/// matching. Categories are tested in a fixed priority order and the first
/// match wins; that order is part of the contract.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    plate: Regex,
    after_vehicle: Regex,
}

impl IntentRouter {
    pub fn new() -> Self {
        Self {
            plate: Regex::new(PLATE_PATTERN).expect("plate pattern compiles"),
            after_vehicle: Regex::new(r"(?i)vehicle\s+(\w+)").expect("vehicle pattern compiles"),
        }
    }

    pub fn classify(&self, input: &str) -> Intent {
        let lower = input.to_lowercase();

        if lower.contains("check") || lower.contains("status") || lower.contains("health") {
            Intent::CheckVehicle
        } else if lower.contains("schedule")
            || lower.contains("book")
            || lower.contains("appointment")
        {
            Intent::ScheduleService
        } else if lower.contains("diagnos") || lower.contains("problem") || lower.contains("issue")
        {
            Intent::GetDiagnosis
        } else if lower.contains("rca")
            || lower.contains("root cause")
            || lower.contains("analysis")
        {
            Intent::RcaRequest
        } else {
            Intent::General
        }
    }

    /// First plate-shaped substring, else the first token after the word
    /// "vehicle", else the default id (logged, not silent).
    pub fn extract_vehicle_id(&self, input: &str) -> String {
        if let Some(m) = self.plate.find(input) {
            return m.as_str().to_string();
        }
        if let Some(captures) = self.after_vehicle.captures(input) {
            if let Some(token) = captures.get(1) {
                return token.as_str().to_string();
            }
        }
        tracing::warn!(
            input,
            "no vehicle id found in input, falling back to {}",
            DEFAULT_VEHICLE_ID
        );
        DEFAULT_VEHICLE_ID.to_string()
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vehicle_keywords() {
        let router = IntentRouter::new();
        assert_eq!(
            router.classify("Can you check my vehicle's health?"),
            Intent::CheckVehicle
        );
        assert_eq!(
            router.classify("What's the STATUS of my fleet?"),
            Intent::CheckVehicle
        );
    }

    #[test]
    fn test_schedule_keywords() {
        let router = IntentRouter::new();
        assert_eq!(
            router.classify("I'd like to schedule an appointment"),
            Intent::ScheduleService
        );
        assert_eq!(router.classify("book a slot"), Intent::ScheduleService);
    }

    #[test]
    fn test_diagnosis_and_rca_keywords() {
        let router = IntentRouter::new();
        assert_eq!(router.classify("diagnose my engine"), Intent::GetDiagnosis);
        assert_eq!(
            router.classify("there is a problem with the brakes"),
            Intent::GetDiagnosis
        );
        assert_eq!(
            router.classify("show me the root cause report"),
            Intent::RcaRequest
        );
    }

    #[test]
    fn test_general_fallback() {
        let router = IntentRouter::new();
        assert_eq!(router.classify("hello there"), Intent::General);
    }

    #[test]
    fn test_overlapping_keywords_resolve_to_earlier_category() {
        // Contains both "check" and "schedule"; category order decides
        let router = IntentRouter::new();
        assert_eq!(
            router.classify("check the car then schedule service"),
            Intent::CheckVehicle
        );
    }

    #[test]
    fn test_extract_plate_id() {
        let router = IntentRouter::new();
        assert_eq!(
            router.extract_vehicle_id("Check vehicle MH12AB1234 status"),
            "MH12AB1234"
        );
    }

    #[test]
    fn test_extract_plate_id_case_insensitive() {
        let router = IntentRouter::new();
        assert_eq!(router.extract_vehicle_id("check dl05cd5678"), "dl05cd5678");
    }

    #[test]
    fn test_extract_token_after_vehicle_word() {
        let router = IntentRouter::new();
        assert_eq!(router.extract_vehicle_id("status of vehicle TRUCK7"), "TRUCK7");
    }

    #[test]
    fn test_extract_falls_back_to_default() {
        let router = IntentRouter::new();
        assert_eq!(router.extract_vehicle_id("check my car"), DEFAULT_VEHICLE_ID);
    }
}
