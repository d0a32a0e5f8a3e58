use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Settings for the mock fleet REST facade. When disabled the service runs
/// on the built-in sample fleet instead.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

/// Upper-bound thresholds: warn above `max`, critical above `critical`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct UpperBound {
    pub max: f64,
    pub critical: f64,
}

/// Lower-bound thresholds: warn below `min`, critical below `critical`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LowerBound {
    pub min: f64,
    pub critical: f64,
}

/// Static per-metric fault thresholds, loaded once and never mutated.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    #[serde(default = "default_temperature")]
    pub temperature: UpperBound,
    #[serde(default = "default_vibration")]
    pub vibration: UpperBound,
    #[serde(default = "default_oil_pressure")]
    pub oil_pressure: LowerBound,
    #[serde(default = "default_battery_voltage")]
    pub battery_voltage: LowerBound,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            vibration: default_vibration(),
            oil_pressure: default_oil_pressure(),
            battery_voltage: default_battery_voltage(),
        }
    }
}

fn default_temperature() -> UpperBound {
    UpperBound {
        max: 100.0,
        critical: 105.0,
    }
}

fn default_vibration() -> UpperBound {
    UpperBound {
        max: 3.5,
        critical: 4.5,
    }
}

fn default_oil_pressure() -> LowerBound {
    LowerBound {
        min: 35.0,
        critical: 30.0,
    }
}

fn default_battery_voltage() -> LowerBound {
    LowerBound {
        min: 12.0,
        critical: 11.5,
    }
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_thresholds() -> anyhow::Result<Thresholds> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/thresholds").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults_match_monitored_bounds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.temperature.max, 100.0);
        assert_eq!(thresholds.temperature.critical, 105.0);
        assert_eq!(thresholds.oil_pressure.min, 35.0);
        assert_eq!(thresholds.oil_pressure.critical, 30.0);
        assert_eq!(thresholds.battery_voltage.critical, 11.5);
        assert_eq!(thresholds.vibration.max, 3.5);
    }

    #[test]
    fn test_upstream_defaults() {
        let settings = UpstreamSettings::default();
        assert!(!settings.enabled);
        assert_eq!(settings.timeout_secs, 5);
    }
}
