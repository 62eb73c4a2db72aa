use contracts::enums::BacterialThreshold;
use contracts::shared::config::{AlertSettings, ThresholdsConfig};
use contracts::shared::error::{parse_number, ValidationError};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Thresholds,
    Users,
    Languages,
    Integrations,
    Audit,
}

impl AdminTab {
    pub fn code(&self) -> &'static str {
        match self {
            AdminTab::Thresholds => "thresholds",
            AdminTab::Users => "users",
            AdminTab::Languages => "languages",
            AdminTab::Integrations => "integrations",
            AdminTab::Audit => "audit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Thresholds => "Thresholds",
            AdminTab::Users => "Users & Roles",
            AdminTab::Languages => "Languages",
            AdminTab::Integrations => "Integrations",
            AdminTab::Audit => "Audit Logs",
        }
    }

    pub fn all() -> Vec<AdminTab> {
        vec![
            AdminTab::Thresholds,
            AdminTab::Users,
            AdminTab::Languages,
            AdminTab::Integrations,
            AdminTab::Audit,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Raw text of the threshold form, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdsDraft {
    pub ph_min: String,
    pub ph_max: String,
    pub tds_max: String,
    pub turbidity_max: String,
    pub temperature_min: String,
    pub temperature_max: String,
    pub bacterial: String,
    pub risk_threshold: String,
}

impl ThresholdsDraft {
    pub fn from_config(thresholds: &ThresholdsConfig, alerts: &AlertSettings) -> Self {
        Self {
            ph_min: thresholds.ph_min.to_string(),
            ph_max: thresholds.ph_max.to_string(),
            tds_max: thresholds.tds_max.to_string(),
            turbidity_max: thresholds.turbidity_max.to_string(),
            temperature_min: thresholds.temperature_min.to_string(),
            temperature_max: thresholds.temperature_max.to_string(),
            bacterial: thresholds.bacterial.code().to_string(),
            risk_threshold: alerts.risk_threshold.to_string(),
        }
    }

    pub fn thresholds(&self) -> Result<ThresholdsConfig, ValidationError> {
        let bacterial = BacterialThreshold::from_code(&self.bacterial)
            .ok_or(ValidationError::Required { field: "Bacterial Contamination" })?;
        let config = ThresholdsConfig {
            ph_min: parse_number("pH Minimum", &self.ph_min)?,
            ph_max: parse_number("pH Maximum", &self.ph_max)?,
            tds_max: parse_number("TDS Maximum", &self.tds_max)?,
            turbidity_max: parse_number("Turbidity Maximum", &self.turbidity_max)?,
            temperature_min: parse_number("Temperature Minimum", &self.temperature_min)?,
            temperature_max: parse_number("Temperature Maximum", &self.temperature_max)?,
            bacterial,
        };
        config.validate()?;
        Ok(config)
    }

    /// Risk percentage at which alerts fire, 0..=100
    pub fn risk_threshold(&self) -> Result<u8, ValidationError> {
        let value = parse_number("Risk Threshold", &self.risk_threshold)?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "Risk Threshold",
                value,
                lower: 0.0,
                upper: 100.0,
            });
        }
        Ok(value.round() as u8)
    }
}

#[derive(Clone, Debug)]
pub struct AdminState {
    pub user_query: String,
    pub audit_category: String,
    pub last_error: Option<ValidationError>,
    pub saved: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            user_query: String::new(),
            audit_category: "all".to_string(),
            last_error: None,
            saved: false,
        }
    }
}

pub fn create_state() -> RwSignal<AdminState> {
    RwSignal::new(AdminState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::config::builtin_defaults;

    fn draft() -> ThresholdsDraft {
        let config = builtin_defaults();
        ThresholdsDraft::from_config(&config.thresholds, &config.alerts)
    }

    #[test]
    fn test_defaults_round_trip_through_form() {
        let config = builtin_defaults();
        let d = draft();
        assert_eq!(d.ph_min, "6.5");
        assert_eq!(d.bacterial, "any_detection");
        assert_eq!(d.thresholds(), Ok(config.thresholds));
        assert_eq!(d.risk_threshold(), Ok(75));
    }

    #[test]
    fn test_non_numeric_input_names_the_field() {
        let mut d = draft();
        d.tds_max = "lots".into();
        let err = d.thresholds().unwrap_err();
        assert_eq!(err.field(), "TDS Maximum");
    }

    #[test]
    fn test_inverted_ph_range_rejected() {
        let mut d = draft();
        d.ph_min = "9".into();
        assert!(matches!(
            d.thresholds(),
            Err(ValidationError::InvertedRange { field: "pH", .. })
        ));
    }

    #[test]
    fn test_risk_threshold_bounds() {
        let mut d = draft();
        d.risk_threshold = "101".into();
        assert!(d.risk_threshold().is_err());
        d.risk_threshold = " 0 ".into();
        assert_eq!(d.risk_threshold(), Ok(0));
    }

    #[test]
    fn test_tab_codes() {
        assert_eq!(AdminTab::from_code("audit"), Some(AdminTab::Audit));
        assert_eq!(AdminTab::from_code("reports"), None);
        assert_eq!(AdminTab::Users.label(), "Users & Roles");
    }
}
