use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::a006_risk_forecast::{forecast_days, ForecastDay};
use crate::enums::Severity;
use crate::shared::classify::DisplayCategory;

/// Headline figure on the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    /// Preformatted ("23", "156/178")
    pub value: String,
    /// Secondary line ("+3 from yesterday")
    pub change: String,
    pub category: DisplayCategory,
}

/// Condensed alert row of the overview feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAlert {
    pub village: String,
    #[serde(rename = "type")]
    pub category: String,
    pub severity: Severity,
    pub time: String,
}

/// Navigation shortcut button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub path: &'static str,
}

/// Days of the forecast summarised on the overview
pub const OVERVIEW_FORECAST_DAYS: usize = 5;

static KPIS: Lazy<Vec<KpiCard>> = Lazy::new(|| {
    [
        ("Unsafe Water Sources", "23", "+3 from yesterday", DisplayCategory::Danger),
        ("High-Risk Villages", "8", "+1 from yesterday", DisplayCategory::Warning),
        ("Active Alerts", "12", "5 critical", DisplayCategory::Danger),
        ("Devices Online", "156/178", "87.6% uptime", DisplayCategory::Success),
    ]
    .into_iter()
    .map(|(title, value, change, category)| KpiCard {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        category,
    })
    .collect()
});

static RECENT: Lazy<Vec<RecentAlert>> = Lazy::new(|| {
    [
        ("Majuli Village", "Bacterial Contamination", Severity::High, "15 min ago"),
        ("Dibrugarh Rural", "High Turbidity", Severity::Medium, "32 min ago"),
        ("Golaghat Area", "pH Level Critical", Severity::High, "1 hour ago"),
        ("Jorhat District", "TDS Exceeds Limit", Severity::Medium, "2 hours ago"),
    ]
    .into_iter()
    .map(|(village, category, severity, time)| RecentAlert {
        village: village.into(),
        category: category.into(),
        severity,
        time: time.into(),
    })
    .collect()
});

static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "Map View", path: "/map" },
    QuickAction { label: "Sensors", path: "/sensors" },
    QuickAction { label: "Community", path: "/volunteers" },
    QuickAction { label: "Settings", path: "/admin" },
];

pub fn kpi_cards() -> &'static [KpiCard] {
    &KPIS
}

pub fn recent_alerts() -> &'static [RecentAlert] {
    &RECENT
}

pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}

/// Leading days of the seven-day forecast
pub fn overview_forecast() -> &'static [ForecastDay] {
    let days = forecast_days();
    &days[..days.len().min(OVERVIEW_FORECAST_DAYS)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::classify::Classify;

    #[test]
    fn test_kpis() {
        let kpis = kpi_cards();
        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[3].value, "156/178");
        assert_eq!(kpis[3].category, DisplayCategory::Success);
    }

    #[test]
    fn test_overview_shows_five_days() {
        let days = overview_forecast();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day, "Today");
        assert_eq!(days[4].day, "Day 5");
    }

    #[test]
    fn test_recent_alert_badges() {
        let severities: Vec<DisplayCategory> =
            recent_alerts().iter().map(|a| a.severity.category()).collect();
        assert_eq!(
            severities,
            vec![
                DisplayCategory::Danger,
                DisplayCategory::Warning,
                DisplayCategory::Danger,
                DisplayCategory::Warning,
            ]
        );
    }

    #[test]
    fn test_quick_actions_point_at_dashboard_routes() {
        assert!(quick_actions().iter().all(|a| a.path.starts_with('/')));
        assert_eq!(quick_actions()[2].path, "/volunteers");
    }
}
