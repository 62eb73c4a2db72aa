use once_cell::sync::Lazy;

use super::aggregate::{FeatureImportance, ForecastDay};
use super::model::{DataSource, ModelInfo};
use crate::enums::{RiskLevel, Trend};
use crate::shared::classify::DisplayCategory;

static FORECAST: Lazy<Vec<ForecastDay>> = Lazy::new(|| {
    let rows: [(&str, &str, RiskLevel, u8, Trend, &[&str]); 7] = [
        (
            "Today",
            "22 Sep",
            RiskLevel::High,
            89,
            Trend::Up,
            &["Bacterial contamination", "High turbidity", "Recent rainfall"],
        ),
        (
            "Tomorrow",
            "23 Sep",
            RiskLevel::High,
            85,
            Trend::Stable,
            &["Persistent contamination", "Weather conditions"],
        ),
        (
            "Day 3",
            "24 Sep",
            RiskLevel::Medium,
            72,
            Trend::Down,
            &["Improving water quality", "Reduced rainfall"],
        ),
        (
            "Day 4",
            "25 Sep",
            RiskLevel::Medium,
            68,
            Trend::Down,
            &["Treatment effects", "Stable conditions"],
        ),
        (
            "Day 5",
            "26 Sep",
            RiskLevel::Low,
            58,
            Trend::Down,
            &["Expected improvement", "Dry weather"],
        ),
        (
            "Day 6",
            "27 Sep",
            RiskLevel::Low,
            52,
            Trend::Stable,
            &["Stable conditions", "Monitoring continues"],
        ),
        (
            "Day 7",
            "28 Sep",
            RiskLevel::Low,
            48,
            Trend::Stable,
            &["Long-term stability", "Preventive measures"],
        ),
    ];
    rows.into_iter()
        .map(|(day, date, risk, confidence, trend, factors)| ForecastDay {
            day: day.into(),
            date: date.into(),
            risk,
            confidence,
            trend,
            factors: factors.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
});

static FEATURES: Lazy<Vec<FeatureImportance>> = Lazy::new(|| {
    [
        ("Bacterial Presence", 92, DisplayCategory::Danger),
        ("Turbidity Level", 87, DisplayCategory::Warning),
        ("Recent Rainfall", 76, DisplayCategory::Primary),
        ("Temperature", 64, DisplayCategory::Secondary),
        ("pH Level", 58, DisplayCategory::Muted),
        ("TDS Concentration", 45, DisplayCategory::Muted),
        ("Population Density", 38, DisplayCategory::Muted),
        ("Historical Outbreaks", 32, DisplayCategory::Muted),
    ]
    .into_iter()
    .map(|(feature, importance, category)| FeatureImportance {
        feature: feature.into(),
        importance,
        category,
    })
    .collect()
});

static MODEL: Lazy<ModelInfo> = Lazy::new(|| ModelInfo {
    name: "LSTM Model v2.1".into(),
    updated: "Updated 5 min ago".into(),
    accuracy: 89.3,
    data_sources: [
        ("IoT Sensors", "156 active"),
        ("Weather API", "Live"),
        ("Health Reports", "Daily"),
    ]
    .into_iter()
    .map(|(name, status)| DataSource {
        name: name.into(),
        status: status.into(),
    })
    .collect(),
});

/// Seven-day forecast, today first
pub fn forecast_days() -> &'static [ForecastDay] {
    &FORECAST
}

/// Feature importance, most influential first
pub fn feature_importance() -> &'static [FeatureImportance] {
    &FEATURES
}

pub fn model_info() -> &'static ModelInfo {
    &MODEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::classify::Classify;

    #[test]
    fn test_forecast_covers_a_week() {
        let days = forecast_days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day, "Today");
        assert_eq!(days[0].factors_label(), "Bacterial contamination, High turbidity, Recent rainfall");
        assert_eq!(days[6].date, "28 Sep");
    }

    #[test]
    fn test_confidence_declines_over_the_week() {
        let confidences: Vec<u8> = forecast_days().iter().map(|d| d.confidence).collect();
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_badges() {
        assert_eq!(forecast_days()[0].risk.category(), DisplayCategory::RiskHigh);
        assert_eq!(forecast_days()[0].trend.category(), DisplayCategory::Danger);
        assert_eq!(forecast_days()[2].trend.category(), DisplayCategory::Success);
    }

    #[test]
    fn test_feature_importance_is_sorted() {
        let features = feature_importance();
        assert_eq!(features.len(), 8);
        assert!(features.windows(2).all(|w| w[0].importance >= w[1].importance));
    }

    #[test]
    fn test_model_info() {
        assert_eq!(model_info().accuracy_label(), "89.3%");
        assert_eq!(model_info().data_sources.len(), 3);
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&feature_importance()[0]).unwrap();
        assert_eq!(json["category"], "danger");
        let json = serde_json::to_value(&forecast_days()[1]).unwrap();
        assert_eq!(json["risk"], "high");
        assert_eq!(json["trend"], "stable");
    }
}
