use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::classify::{Classify, DisplayCategory};

/// Channel through which a report arrived or a response was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "IVR")]
    Ivr,
    #[serde(rename = "Chatbot")]
    Chatbot,
    #[serde(rename = "Field Visit")]
    FieldVisit,
}

impl Channel {
    pub fn code(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Ivr => "IVR",
            Channel::Chatbot => "Chatbot",
            Channel::FieldVisit => "Field Visit",
        }
    }

    /// Label in the per-source statistics card
    pub fn stats_label(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS Reports",
            Channel::Ivr => "IVR Calls",
            Channel::Chatbot => "Chatbot",
            Channel::FieldVisit => "Field Visits",
        }
    }

    pub fn all() -> Vec<Channel> {
        vec![Channel::Sms, Channel::Ivr, Channel::Chatbot, Channel::FieldVisit]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SMS" => Some(Channel::Sms),
            "IVR" => Some(Channel::Ivr),
            "Chatbot" => Some(Channel::Chatbot),
            "Field Visit" => Some(Channel::FieldVisit),
            _ => None,
        }
    }
}

impl Classify for Channel {
    fn category(&self) -> DisplayCategory {
        match self {
            Channel::Sms => DisplayCategory::Primary,
            Channel::Ivr => DisplayCategory::Secondary,
            Channel::Chatbot => DisplayCategory::Success,
            Channel::FieldVisit => DisplayCategory::Warning,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Three-level severity shared by community reports, recent alerts and audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn all() -> Vec<Severity> {
        vec![Severity::High, Severity::Medium, Severity::Low]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl Classify for Severity {
    fn category(&self) -> DisplayCategory {
        match self {
            Severity::High => DisplayCategory::Danger,
            Severity::Medium => DisplayCategory::Warning,
            Severity::Low => DisplayCategory::Success,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle label of a community report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Verified,
    Investigating,
    Resolved,
}

impl ReportStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Verified => "verified",
            ReportStatus::Investigating => "investigating",
            ReportStatus::Resolved => "resolved",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Verified => "Verified",
            ReportStatus::Investigating => "Investigating",
            ReportStatus::Resolved => "Resolved",
        }
    }

    pub fn all() -> Vec<ReportStatus> {
        vec![
            ReportStatus::Pending,
            ReportStatus::Verified,
            ReportStatus::Investigating,
            ReportStatus::Resolved,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ReportStatus::Pending),
            "verified" => Some(ReportStatus::Verified),
            "investigating" => Some(ReportStatus::Investigating),
            "resolved" => Some(ReportStatus::Resolved),
            _ => None,
        }
    }
}

impl Classify for ReportStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            ReportStatus::Resolved => DisplayCategory::Success,
            ReportStatus::Verified => DisplayCategory::Primary,
            ReportStatus::Investigating => DisplayCategory::Warning,
            ReportStatus::Pending => DisplayCategory::Danger,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Priority of a volunteer task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }

    pub fn all() -> Vec<TaskPriority> {
        vec![TaskPriority::High, TaskPriority::Medium, TaskPriority::Low]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(TaskPriority::High),
            "medium" => Some(TaskPriority::Medium),
            "low" => Some(TaskPriority::Low),
            _ => None,
        }
    }
}

impl Classify for TaskPriority {
    fn category(&self) -> DisplayCategory {
        match self {
            TaskPriority::High => DisplayCategory::Danger,
            TaskPriority::Medium => DisplayCategory::Warning,
            TaskPriority::Low => DisplayCategory::Primary,
        }
    }
}

/// Lifecycle label of a volunteer task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Planned,
    Assigned,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Planned",
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Planned,
            TaskStatus::Assigned,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "planned" => Some(TaskStatus::Planned),
            "assigned" => Some(TaskStatus::Assigned),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl Classify for TaskStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            TaskStatus::Completed => DisplayCategory::Success,
            TaskStatus::InProgress => DisplayCategory::Primary,
            TaskStatus::Assigned => DisplayCategory::Warning,
            TaskStatus::Planned => DisplayCategory::Muted,
        }
    }
}
