// Telemetry domain model
use serde::{Deserialize, Serialize};

/// One immutable telemetry snapshot for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReading {
    pub temperature: f64,
    pub rpm: f64,
    pub oil_pressure: f64,
    pub battery_voltage: f64,
    pub vibration: f64,
    // Upstream /predict payloads omit mileage
    #[serde(default)]
    pub mileage: f64,
}

impl TelemetryReading {
    pub fn new(
        temperature: f64,
        rpm: f64,
        oil_pressure: f64,
        battery_voltage: f64,
        vibration: f64,
        mileage: f64,
    ) -> Self {
        Self {
            temperature,
            rpm,
            oil_pressure,
            battery_voltage,
            vibration,
            mileage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let reading = TelemetryReading::new(98.0, 3500.0, 35.0, 12.2, 4.2, 75000.0);
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json["oilPressure"], 35.0);
        assert_eq!(json["batteryVoltage"], 12.2);
    }

    #[test]
    fn test_mileage_defaults_when_absent() {
        let json = r#"{"temperature":98,"rpm":3500,"oilPressure":35,"batteryVoltage":12.2,"vibration":4.2}"#;
        let reading: TelemetryReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.mileage, 0.0);
    }
}
