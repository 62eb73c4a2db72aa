use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::classify::{Classify, DisplayCategory};

/// Severity of a dispatch alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn code(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }

    pub fn all() -> Vec<AlertSeverity> {
        vec![AlertSeverity::Critical, AlertSeverity::Warning, AlertSeverity::Info]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "critical" => Some(AlertSeverity::Critical),
            "warning" => Some(AlertSeverity::Warning),
            "info" => Some(AlertSeverity::Info),
            _ => None,
        }
    }
}

impl Classify for AlertSeverity {
    fn category(&self) -> DisplayCategory {
        match self {
            AlertSeverity::Critical => DisplayCategory::Danger,
            AlertSeverity::Warning => DisplayCategory::Warning,
            AlertSeverity::Info => DisplayCategory::Primary,
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle label of an alert. No transition rules are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Monitoring,
    Resolved,
}

impl AlertStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Monitoring => "monitoring",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Monitoring => "Monitoring",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn all() -> Vec<AlertStatus> {
        vec![AlertStatus::Active, AlertStatus::Monitoring, AlertStatus::Resolved]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(AlertStatus::Active),
            "monitoring" => Some(AlertStatus::Monitoring),
            "resolved" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }
}

impl Classify for AlertStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            AlertStatus::Active => DisplayCategory::Danger,
            AlertStatus::Monitoring => DisplayCategory::Warning,
            AlertStatus::Resolved => DisplayCategory::Success,
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status of a supply dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Pending,
    Approved,
    Dispatched,
    Delivered,
}

impl DispatchStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DispatchStatus::Pending => "pending",
            DispatchStatus::Approved => "approved",
            DispatchStatus::Dispatched => "dispatched",
            DispatchStatus::Delivered => "delivered",
        }
    }

    pub fn all() -> Vec<DispatchStatus> {
        vec![
            DispatchStatus::Pending,
            DispatchStatus::Approved,
            DispatchStatus::Dispatched,
            DispatchStatus::Delivered,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(DispatchStatus::Pending),
            "approved" => Some(DispatchStatus::Approved),
            "dispatched" => Some(DispatchStatus::Dispatched),
            "delivered" => Some(DispatchStatus::Delivered),
            _ => None,
        }
    }
}

impl Classify for DispatchStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            DispatchStatus::Delivered => DisplayCategory::Success,
            DispatchStatus::Dispatched => DisplayCategory::Primary,
            DispatchStatus::Approved => DisplayCategory::Warning,
            DispatchStatus::Pending => DisplayCategory::Muted,
        }
    }
}
