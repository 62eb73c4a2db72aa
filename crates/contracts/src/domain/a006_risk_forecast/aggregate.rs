use serde::{Deserialize, Serialize};

use crate::enums::{RiskLevel, Trend};
use crate::shared::classify::DisplayCategory;

// ============================================================================
// Aggregate
// ============================================================================

/// One day of the outbreak risk forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day: String,
    pub date: String,
    pub risk: RiskLevel,
    /// Model confidence, percent
    pub confidence: u8,
    pub trend: Trend,
    pub factors: Vec<String>,
}

impl ForecastDay {
    pub fn factors_label(&self) -> String {
        self.factors.join(", ")
    }
}

/// Contribution of an input feature to the risk model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureImportance {
    pub feature: String,
    /// Percent
    pub importance: u8,
    pub category: DisplayCategory,
}
