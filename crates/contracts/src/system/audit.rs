use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;
use crate::shared::filter::{HasStatus, Searchable};

pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Group an audit action belongs to, used by the log filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditCategory {
    Alerts,
    Users,
    System,
}

impl AuditCategory {
    pub fn code(&self) -> &'static str {
        match self {
            AuditCategory::Alerts => "alerts",
            AuditCategory::Users => "users",
            AuditCategory::System => "system",
        }
    }

    /// Option text in the filter select
    pub fn filter_label(&self) -> &'static str {
        match self {
            AuditCategory::Alerts => "Alerts Only",
            AuditCategory::Users => "User Actions",
            AuditCategory::System => "System Events",
        }
    }

    pub fn all() -> Vec<AuditCategory> {
        vec![AuditCategory::Alerts, AuditCategory::Users, AuditCategory::System]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "alerts" => Some(AuditCategory::Alerts),
            "users" => Some(AuditCategory::Users),
            "system" => Some(AuditCategory::System),
            _ => None,
        }
    }
}

mod timestamp_format {
    use super::AUDIT_TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(AUDIT_TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, AUDIT_TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: u32,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub action: String,
    pub details: String,
    pub severity: Severity,
}

impl AuditLogEntry {
    /// Account actions go to `users`, entries written by the platform itself
    /// to `system`, everything else to `alerts`.
    pub fn category(&self) -> AuditCategory {
        if self.action.starts_with("User") {
            AuditCategory::Users
        } else if self.user == "System" {
            AuditCategory::System
        } else {
            AuditCategory::Alerts
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(AUDIT_TIMESTAMP_FORMAT).to_string()
    }
}

impl Searchable for AuditLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.user.as_str(), self.action.as_str(), self.details.as_str()]
    }
}

impl HasStatus for AuditLogEntry {
    type Status = AuditCategory;

    fn status(&self) -> AuditCategory {
        self.category()
    }
}

static AUDIT_LOG: Lazy<Vec<AuditLogEntry>> = Lazy::new(|| {
    [
        (
            1,
            "2024-09-22 14:30:15",
            "Dr. Rajesh Kumar",
            "Alert Triggered",
            "Bacterial contamination alert for Majuli Village",
            Severity::High,
        ),
        (
            2,
            "2024-09-22 14:15:32",
            "System",
            "Threshold Breach",
            "pH level exceeded safe limits at AQS-001",
            Severity::Medium,
        ),
        (
            3,
            "2024-09-22 13:45:18",
            "Priya Sharma",
            "Dispatch Approved",
            "ORS packets dispatch approved for DSP-001",
            Severity::Low,
        ),
        (
            4,
            "2024-09-22 13:20:44",
            "Ravi Patel",
            "User Created",
            "New volunteer account created for field team",
            Severity::Low,
        ),
    ]
    .into_iter()
    // seed rows with a malformed timestamp are dropped
    .filter_map(|(id, at, user, action, details, severity)| {
        let timestamp = NaiveDateTime::parse_from_str(at, AUDIT_TIMESTAMP_FORMAT).ok()?;
        Some(AuditLogEntry {
            id,
            timestamp,
            user: user.into(),
            action: action.into(),
            details: details.into(),
            severity,
        })
    })
    .collect()
});

/// Audit trail, newest first
pub fn audit_log() -> &'static [AuditLogEntry] {
    &AUDIT_LOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_entities, FilterCriteria, StatusFilter};

    #[test]
    fn test_seed_timestamps_parse() {
        assert_eq!(audit_log().len(), 4);
        assert_eq!(audit_log()[0].timestamp_label(), "2024-09-22 14:30:15");
        assert!(audit_log().windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[test]
    fn test_categories_derive_from_action() {
        let categories: Vec<AuditCategory> = audit_log().iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                AuditCategory::Alerts,
                AuditCategory::System,
                AuditCategory::Alerts,
                AuditCategory::Users,
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let all = filter_entities(
            audit_log(),
            &FilterCriteria::new("", StatusFilter::parse("all", AuditCategory::from_code)),
        );
        assert_eq!(all.len(), 4);

        let users = filter_entities(
            audit_log(),
            &FilterCriteria::new("", StatusFilter::parse("users", AuditCategory::from_code)),
        );
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user, "Ravi Patel");

        let alerts = filter_entities(audit_log(), &FilterCriteria::status(AuditCategory::Alerts));
        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn test_json_keeps_log_format() {
        let json = serde_json::to_value(&audit_log()[1]).unwrap();
        assert_eq!(json["timestamp"], "2024-09-22 14:15:32");
        let back: AuditLogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(&back, &audit_log()[1]);

        let bad = serde_json::json!({
            "id": 9, "timestamp": "22/09/2024", "user": "System",
            "action": "x", "details": "y", "severity": "low"
        });
        assert!(serde_json::from_value::<AuditLogEntry>(bad).is_err());
    }
}
