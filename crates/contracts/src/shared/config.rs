use serde::{Deserialize, Serialize};

use crate::enums::{BacterialThreshold, SmsProvider, WeatherProvider};
use crate::shared::error::{ConfigError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub thresholds: ThresholdsConfig,
    pub alerts: AlertSettings,
    pub integrations: IntegrationsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
    pub version: String,
    pub region: String,
    pub default_language: String,
}

/// Water-quality limits based on BIS/WHO drinking water standards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    pub ph_min: f64,
    pub ph_max: f64,
    pub tds_max: f64,
    pub turbidity_max: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub bacterial: BacterialThreshold,
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("pH", self.ph_min, self.ph_max)?;
        check_bounds("pH", self.ph_min, 0.0, 14.0)?;
        check_bounds("pH", self.ph_max, 0.0, 14.0)?;
        check_positive("TDS", self.tds_max)?;
        check_positive("Turbidity", self.turbidity_max)?;
        check_range("Temperature", self.temperature_min, self.temperature_max)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Forecast risk (%) at which an alert is raised
    pub risk_threshold: u8,
    pub sms_enabled: bool,
    pub ivr_enabled: bool,
    pub chatbot_enabled: bool,
    pub email_enabled: bool,
}

impl AlertSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_bounds("Risk Threshold", f64::from(self.risk_threshold), 0.0, 100.0)
    }

    /// Number of notification channels switched on
    pub fn enabled_channels(&self) -> usize {
        [
            self.sms_enabled,
            self.ivr_enabled,
            self.chatbot_enabled,
            self.email_enabled,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    pub sms_provider: SmsProvider,
    pub weather_provider: WeatherProvider,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds.validate()?;
        self.alerts.validate()?;
        Ok(())
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[app]
name = "AquaShield"
version = "v2.1.0"
region = "Northeast India"
default_language = "en"

[thresholds]
ph_min = 6.5
ph_max = 8.5
tds_max = 500.0
turbidity_max = 5.0
temperature_min = 10.0
temperature_max = 40.0
bacterial = "any_detection"

[alerts]
risk_threshold = 75
sms_enabled = true
ivr_enabled = true
chatbot_enabled = true
email_enabled = false

[integrations]
sms_provider = "twilio"
weather_provider = "openweather"
"#;

/// Parse and validate a TOML configuration document.
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load the embedded default configuration.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

/// Compiled-in fallback used when the embedded document cannot be loaded.
pub fn builtin_defaults() -> AppConfig {
    AppConfig {
        app: AppSection {
            name: "AquaShield".into(),
            version: "v2.1.0".into(),
            region: "Northeast India".into(),
            default_language: "en".into(),
        },
        thresholds: ThresholdsConfig {
            ph_min: 6.5,
            ph_max: 8.5,
            tds_max: 500.0,
            turbidity_max: 5.0,
            temperature_min: 10.0,
            temperature_max: 40.0,
            bacterial: BacterialThreshold::AnyDetection,
        },
        alerts: AlertSettings {
            risk_threshold: 75,
            sms_enabled: true,
            ivr_enabled: true,
            chatbot_enabled: true,
            email_enabled: false,
        },
        integrations: IntegrationsConfig {
            sms_provider: SmsProvider::Twilio,
            weather_provider: WeatherProvider::OpenWeather,
        },
    }
}

fn check_range(field: &'static str, min: f64, max: f64) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn check_bounds(field: &'static str, value: f64, lower: f64, upper: f64) -> Result<(), ValidationError> {
    if value < lower || value > upper {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            lower,
            upper,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.app.version, "v2.1.0");
        assert_eq!(config.thresholds.ph_min, 6.5);
        assert_eq!(config.thresholds.bacterial, BacterialThreshold::AnyDetection);
        assert_eq!(config.alerts.risk_threshold, 75);
        assert!(!config.alerts.email_enabled);
        assert_eq!(config.alerts.enabled_channels(), 3);
        assert_eq!(config.integrations.sms_provider, SmsProvider::Twilio);
    }

    #[test]
    fn test_builtin_defaults_match_embedded() {
        assert_eq!(load_config().unwrap(), builtin_defaults());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut thresholds = builtin_defaults().thresholds;
        thresholds.ph_min = 9.0;
        assert_eq!(
            thresholds.validate(),
            Err(ValidationError::InvertedRange {
                field: "pH",
                min: 9.0,
                max: 8.5
            })
        );

        let mut thresholds = builtin_defaults().thresholds;
        thresholds.temperature_max = 5.0;
        assert!(matches!(
            thresholds.validate(),
            Err(ValidationError::InvertedRange { field: "Temperature", .. })
        ));
    }

    #[test]
    fn test_risk_threshold_bounds() {
        let mut alerts = builtin_defaults().alerts;
        alerts.risk_threshold = 100;
        assert!(alerts.validate().is_ok());
        alerts.risk_threshold = 101;
        assert!(matches!(
            alerts.validate(),
            Err(ValidationError::OutOfRange { field: "Risk Threshold", .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_config("[app"), Err(ConfigError::Parse(_))));

        let broken = DEFAULT_CONFIG.replace("tds_max = 500.0", "tds_max = 0.0");
        assert!(matches!(
            parse_config(&broken),
            Err(ConfigError::Invalid(ValidationError::NotPositive { field: "TDS" }))
        ));
    }
}
