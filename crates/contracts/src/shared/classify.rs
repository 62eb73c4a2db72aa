use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display palette
// ---------------------------------------------------------------------------

/// Display category of a status value. Drives colour only, carries no meaning
/// beyond presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayCategory {
    Danger,
    Warning,
    Success,
    Muted,
    Primary,
    Secondary,
    WaterSafe,
    WaterUnsafe,
    WaterReview,
    RiskHigh,
    RiskMedium,
    RiskLow,
    SensorOnline,
    SensorOffline,
}

impl DisplayCategory {
    /// Palette token used in CSS class names (`badge--{token}`, `text-{token}`).
    pub fn token(&self) -> &'static str {
        match self {
            DisplayCategory::Danger => "danger",
            DisplayCategory::Warning => "warning",
            DisplayCategory::Success => "success",
            DisplayCategory::Muted => "muted",
            DisplayCategory::Primary => "primary",
            DisplayCategory::Secondary => "secondary",
            DisplayCategory::WaterSafe => "water-safe",
            DisplayCategory::WaterUnsafe => "water-unsafe",
            DisplayCategory::WaterReview => "water-review",
            DisplayCategory::RiskHigh => "risk-high",
            DisplayCategory::RiskMedium => "risk-medium",
            DisplayCategory::RiskLow => "risk-low",
            DisplayCategory::SensorOnline => "sensor-online",
            DisplayCategory::SensorOffline => "sensor-offline",
        }
    }

    /// Collapse a domain palette token onto the base palette.
    pub fn base(&self) -> DisplayCategory {
        match self {
            DisplayCategory::WaterSafe
            | DisplayCategory::RiskLow
            | DisplayCategory::SensorOnline => DisplayCategory::Success,
            DisplayCategory::WaterUnsafe
            | DisplayCategory::RiskHigh
            | DisplayCategory::SensorOffline => DisplayCategory::Danger,
            DisplayCategory::WaterReview | DisplayCategory::RiskMedium => DisplayCategory::Warning,
            other => *other,
        }
    }

    pub fn all() -> Vec<DisplayCategory> {
        vec![
            DisplayCategory::Danger,
            DisplayCategory::Warning,
            DisplayCategory::Success,
            DisplayCategory::Muted,
            DisplayCategory::Primary,
            DisplayCategory::Secondary,
            DisplayCategory::WaterSafe,
            DisplayCategory::WaterUnsafe,
            DisplayCategory::WaterReview,
            DisplayCategory::RiskHigh,
            DisplayCategory::RiskMedium,
            DisplayCategory::RiskLow,
            DisplayCategory::SensorOnline,
            DisplayCategory::SensorOffline,
        ]
    }
}

impl Default for DisplayCategory {
    fn default() -> Self {
        DisplayCategory::Muted
    }
}

/// A closed enumeration with a display category for every value.
pub trait Classify {
    fn category(&self) -> DisplayCategory;
}

// ---------------------------------------------------------------------------
// String entry point
// ---------------------------------------------------------------------------

/// Enumerations reachable through [`classify_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Site,
    Risk,
    Sensor,
    Reading,
    Signal,
    Link,
    Gps,
    AlertSeverity,
    AlertStatus,
    Dispatch,
    Severity,
    Report,
    TaskPriority,
    Task,
    Trend,
    UserRole,
    UserStatus,
}

/// Classify a raw code of the given kind. Unknown codes map to `Muted`.
pub fn classify_code(kind: StatusKind, code: &str) -> DisplayCategory {
    use crate::enums::*;

    fn lookup<T: Classify>(parsed: Option<T>) -> DisplayCategory {
        parsed.map(|v| v.category()).unwrap_or_default()
    }

    match kind {
        StatusKind::Site => lookup(SiteStatus::from_code(code)),
        StatusKind::Risk => lookup(RiskLevel::from_code(code)),
        StatusKind::Sensor => lookup(SensorStatus::from_code(code)),
        StatusKind::Reading => lookup(ReadingStatus::from_code(code)),
        StatusKind::Signal => lookup(SignalQuality::from_code(code)),
        StatusKind::Link => lookup(LinkState::from_code(code)),
        StatusKind::Gps => lookup(GpsState::from_code(code)),
        StatusKind::AlertSeverity => lookup(AlertSeverity::from_code(code)),
        StatusKind::AlertStatus => lookup(AlertStatus::from_code(code)),
        StatusKind::Dispatch => lookup(DispatchStatus::from_code(code)),
        StatusKind::Severity => lookup(Severity::from_code(code)),
        StatusKind::Report => lookup(ReportStatus::from_code(code)),
        StatusKind::TaskPriority => lookup(TaskPriority::from_code(code)),
        StatusKind::Task => lookup(TaskStatus::from_code(code)),
        StatusKind::Trend => lookup(Trend::from_code(code)),
        StatusKind::UserRole => lookup(UserRole::from_code(code)),
        StatusKind::UserStatus => lookup(UserStatus::from_code(code)),
    }
}

/// Battery level indicator: above 50% healthy, above 20% low, otherwise critical.
pub fn battery_category(percent: u8) -> DisplayCategory {
    if percent > 50 {
        DisplayCategory::Success
    } else if percent > 20 {
        DisplayCategory::Warning
    } else {
        DisplayCategory::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::*;
    use proptest::prelude::*;

    /// Every value of `$ty` classifies the same through both paths, and its
    /// code round-trips through `from_code` and serde.
    macro_rules! assert_kind_is_total {
        ($kind:expr, $ty:ty) => {
            let values = <$ty>::all();
            assert!(!values.is_empty());
            for value in values {
                let code = value.code();
                assert_eq!(classify_code($kind, code), value.category(), "{:?} {}", $kind, code);
                assert_eq!(<$ty>::from_code(code), Some(value), "{:?} {}", $kind, code);
                assert_eq!(serde_json::to_value(value).unwrap(), code, "{:?} {}", $kind, code);
            }
        };
    }

    const ALL_KINDS: [StatusKind; 17] = [
        StatusKind::Site,
        StatusKind::Risk,
        StatusKind::Sensor,
        StatusKind::Reading,
        StatusKind::Signal,
        StatusKind::Link,
        StatusKind::Gps,
        StatusKind::AlertSeverity,
        StatusKind::AlertStatus,
        StatusKind::Dispatch,
        StatusKind::Severity,
        StatusKind::Report,
        StatusKind::TaskPriority,
        StatusKind::Task,
        StatusKind::Trend,
        StatusKind::UserRole,
        StatusKind::UserStatus,
    ];

    #[test]
    fn test_every_kind_is_total_and_consistent() {
        for kind in ALL_KINDS {
            match kind {
                StatusKind::Site => { assert_kind_is_total!(kind, SiteStatus); }
                StatusKind::Risk => { assert_kind_is_total!(kind, RiskLevel); }
                StatusKind::Sensor => { assert_kind_is_total!(kind, SensorStatus); }
                StatusKind::Reading => { assert_kind_is_total!(kind, ReadingStatus); }
                StatusKind::Signal => { assert_kind_is_total!(kind, SignalQuality); }
                StatusKind::Link => { assert_kind_is_total!(kind, LinkState); }
                StatusKind::Gps => { assert_kind_is_total!(kind, GpsState); }
                StatusKind::AlertSeverity => { assert_kind_is_total!(kind, AlertSeverity); }
                StatusKind::AlertStatus => { assert_kind_is_total!(kind, AlertStatus); }
                StatusKind::Dispatch => { assert_kind_is_total!(kind, DispatchStatus); }
                StatusKind::Severity => { assert_kind_is_total!(kind, Severity); }
                StatusKind::Report => { assert_kind_is_total!(kind, ReportStatus); }
                StatusKind::TaskPriority => { assert_kind_is_total!(kind, TaskPriority); }
                StatusKind::Task => { assert_kind_is_total!(kind, TaskStatus); }
                StatusKind::Trend => { assert_kind_is_total!(kind, Trend); }
                StatusKind::UserRole => { assert_kind_is_total!(kind, UserRole); }
                StatusKind::UserStatus => { assert_kind_is_total!(kind, UserStatus); }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_classify_code_is_total_and_deterministic(
            index in 0..ALL_KINDS.len(),
            code in "[A-Za-z -]{0,16}",
        ) {
            let kind = ALL_KINDS[index];
            let first = classify_code(kind, &code);
            prop_assert_eq!(first, classify_code(kind, &code));
            prop_assert!(DisplayCategory::all().contains(&first));
        }
    }

    #[test]
    fn test_site_palette() {
        assert_eq!(SiteStatus::Safe.category(), DisplayCategory::WaterSafe);
        assert_eq!(SiteStatus::Unsafe.category(), DisplayCategory::WaterUnsafe);
        assert_eq!(SiteStatus::NeedsReview.category(), DisplayCategory::WaterReview);
        assert_eq!(DisplayCategory::WaterReview.token(), "water-review");
    }

    #[test]
    fn test_classify_code_known_values() {
        assert_eq!(classify_code(StatusKind::AlertSeverity, "critical"), DisplayCategory::Danger);
        assert_eq!(classify_code(StatusKind::AlertSeverity, "info"), DisplayCategory::Primary);
        assert_eq!(classify_code(StatusKind::Dispatch, "pending"), DisplayCategory::Muted);
        assert_eq!(classify_code(StatusKind::Report, "pending"), DisplayCategory::Danger);
        assert_eq!(classify_code(StatusKind::Task, "in-progress"), DisplayCategory::Primary);
        assert_eq!(classify_code(StatusKind::TaskPriority, "low"), DisplayCategory::Primary);
        assert_eq!(classify_code(StatusKind::Severity, "low"), DisplayCategory::Success);
        assert_eq!(classify_code(StatusKind::Sensor, "maintenance"), DisplayCategory::Warning);
    }

    #[test]
    fn test_risk_codes_are_case_insensitive() {
        assert_eq!(classify_code(StatusKind::Risk, "High"), DisplayCategory::RiskHigh);
        assert_eq!(classify_code(StatusKind::Risk, "medium"), DisplayCategory::RiskMedium);
        assert_eq!(classify_code(StatusKind::Risk, "LOW"), DisplayCategory::RiskLow);
    }

    #[test]
    fn test_unknown_code_falls_back_to_muted() {
        assert_eq!(classify_code(StatusKind::Site, "flooded"), DisplayCategory::Muted);
        assert_eq!(classify_code(StatusKind::AlertStatus, ""), DisplayCategory::Muted);
        assert_eq!(classify_code(StatusKind::UserRole, "Intern"), DisplayCategory::Muted);
    }

    #[test]
    fn test_trend_palettes_are_mirrored() {
        assert_eq!(Trend::Up.category(), DisplayCategory::Danger);
        assert_eq!(Trend::Up.engagement_category(), DisplayCategory::Success);
        assert_eq!(Trend::Down.category(), DisplayCategory::Success);
        assert_eq!(Trend::Down.engagement_category(), DisplayCategory::Danger);
        assert_eq!(Trend::Stable.category(), Trend::Stable.engagement_category());
    }

    #[test]
    fn test_battery_boundaries() {
        assert_eq!(battery_category(85), DisplayCategory::Success);
        assert_eq!(battery_category(51), DisplayCategory::Success);
        assert_eq!(battery_category(50), DisplayCategory::Warning);
        assert_eq!(battery_category(21), DisplayCategory::Warning);
        assert_eq!(battery_category(20), DisplayCategory::Danger);
        assert_eq!(battery_category(0), DisplayCategory::Danger);
    }

    #[test]
    fn test_base_palette() {
        for category in DisplayCategory::all() {
            let base = category.base();
            assert_eq!(base.base(), base);
        }
        assert_eq!(DisplayCategory::SensorOffline.base(), DisplayCategory::Danger);
        assert_eq!(DisplayCategory::Secondary.base(), DisplayCategory::Secondary);
    }
}
