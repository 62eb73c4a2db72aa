use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::classify::{Classify, DisplayCategory};

/// Qualitative state of a monitored water source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteStatus {
    Safe,
    Unsafe,
    NeedsReview,
}

impl SiteStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SiteStatus::Safe => "safe",
            SiteStatus::Unsafe => "unsafe",
            SiteStatus::NeedsReview => "needs-review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SiteStatus::Safe => "Safe",
            SiteStatus::Unsafe => "Unsafe",
            SiteStatus::NeedsReview => "Needs Review",
        }
    }

    /// Label used in the map status filter
    pub fn filter_label(&self) -> &'static str {
        match self {
            SiteStatus::Safe => "Safe Sources",
            SiteStatus::Unsafe => "Unsafe Sources",
            SiteStatus::NeedsReview => "Needs Review",
        }
    }

    pub fn all() -> Vec<SiteStatus> {
        vec![SiteStatus::Safe, SiteStatus::Unsafe, SiteStatus::NeedsReview]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "safe" => Some(SiteStatus::Safe),
            "unsafe" => Some(SiteStatus::Unsafe),
            "needs-review" => Some(SiteStatus::NeedsReview),
            _ => None,
        }
    }
}

impl Classify for SiteStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            SiteStatus::Safe => DisplayCategory::WaterSafe,
            SiteStatus::Unsafe => DisplayCategory::WaterUnsafe,
            SiteStatus::NeedsReview => DisplayCategory::WaterReview,
        }
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Qualitative outbreak risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }

    /// Recommendation shown next to a site's risk assessment
    pub fn advice(&self) -> &'static str {
        match self {
            RiskLevel::High => "Immediate action recommended. Distribute boil water advisories.",
            RiskLevel::Medium => "Monitor closely. Consider preventive measures.",
            RiskLevel::Low => "Water quality within acceptable range.",
        }
    }

    pub fn all() -> Vec<RiskLevel> {
        vec![RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
    }

    /// Forecast tables spell risk as "High", site records as "high".
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }
}

impl Classify for RiskLevel {
    fn category(&self) -> DisplayCategory {
        match self {
            RiskLevel::High => DisplayCategory::RiskHigh,
            RiskLevel::Medium => DisplayCategory::RiskMedium,
            RiskLevel::Low => DisplayCategory::RiskLow,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
