use once_cell::sync::Lazy;

use super::aggregate::{MonitoredSite, SiteMeasurements, WeatherSnapshot};
use crate::domain::common::GeoPoint;
use crate::enums::{RiskLevel, SiteStatus};

pub const WEATHER_NOW: WeatherSnapshot = WeatherSnapshot {
    rainfall_mm: 12.0,
    temperature_c: 28.0,
};

static SITES: Lazy<Vec<MonitoredSite>> = Lazy::new(|| {
    vec![
        MonitoredSite {
            id: 1,
            name: "Majuli Village Well".into(),
            position: GeoPoint::new(27.0238, 94.2179),
            status: SiteStatus::Unsafe,
            risk: RiskLevel::High,
            last_reading: "15 min ago".into(),
            measurements: SiteMeasurements {
                ph: 6.2,
                tds: 850.0,
                turbidity: 45.0,
                temperature: 28.5,
                bacterial_detected: true,
            },
        },
        MonitoredSite {
            id: 2,
            name: "Dibrugarh Community Center".into(),
            position: GeoPoint::new(27.4728, 94.9120),
            status: SiteStatus::Safe,
            risk: RiskLevel::Low,
            last_reading: "5 min ago".into(),
            measurements: SiteMeasurements {
                ph: 7.1,
                tds: 320.0,
                turbidity: 2.0,
                temperature: 26.8,
                bacterial_detected: false,
            },
        },
        MonitoredSite {
            id: 3,
            name: "Golaghat School".into(),
            position: GeoPoint::new(26.1635, 93.9626),
            status: SiteStatus::NeedsReview,
            risk: RiskLevel::Medium,
            last_reading: "22 min ago".into(),
            measurements: SiteMeasurements {
                ph: 8.3,
                tds: 680.0,
                turbidity: 8.0,
                temperature: 29.2,
                bacterial_detected: false,
            },
        },
        MonitoredSite {
            id: 4,
            name: "Jorhat Health Center".into(),
            position: GeoPoint::new(26.7509, 94.2037),
            status: SiteStatus::Safe,
            risk: RiskLevel::Low,
            last_reading: "3 min ago".into(),
            measurements: SiteMeasurements {
                ph: 7.4,
                tds: 280.0,
                turbidity: 1.0,
                temperature: 27.1,
                bacterial_detected: false,
            },
        },
    ]
});

/// Water sources monitored in the Assam region
pub fn monitored_sites() -> &'static [MonitoredSite] {
    &SITES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{count_with_status, filter_entities, FilterCriteria, StatusFilter};

    #[test]
    fn test_seed_shape() {
        let sites = monitored_sites();
        assert_eq!(sites.len(), 4);
        assert_eq!(count_with_status(sites, SiteStatus::Safe), 2);
        assert_eq!(count_with_status(sites, SiteStatus::Unsafe), 1);
        assert_eq!(count_with_status(sites, SiteStatus::NeedsReview), 1);
    }

    #[test]
    fn test_map_filter_by_select_value() {
        let criteria = FilterCriteria::new("", StatusFilter::parse("safe", SiteStatus::from_code));
        let names: Vec<&str> = filter_entities(monitored_sites(), &criteria)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dibrugarh Community Center", "Jorhat Health Center"]);
    }

    #[test]
    fn test_search_by_name() {
        let found = filter_entities(monitored_sites(), &FilterCriteria::text("Majuli"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_search_by_site_id() {
        let found = filter_entities(monitored_sites(), &FilterCriteria::text("3"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Golaghat School");

        let none = filter_entities(monitored_sites(), &FilterCriteria::text("9"));
        assert!(none.is_empty());
        assert_eq!(filter_entities(monitored_sites(), &FilterCriteria::text("")).len(), 4);
    }

    #[test]
    fn test_details_panel_labels() {
        let golaghat = &monitored_sites()[2];
        assert_eq!(golaghat.status_banner(), "NEEDS REVIEW");
        assert_eq!(golaghat.measurements.bacterial_label(), "not detected");
        assert_eq!(monitored_sites()[0].measurements.bacterial_label(), "detected");
        assert_eq!(MonitoredSite::marker_position(2), (60, 60));
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&monitored_sites()[2]).unwrap();
        assert_eq!(json["status"], "needs-review");
        assert_eq!(json["risk"], "medium");
        assert_eq!(json["lastReading"], "22 min ago");
        assert_eq!(json["measurements"]["bacterialDetected"], false);

        let back: MonitoredSite = serde_json::from_value(json).unwrap();
        assert_eq!(&back, &monitored_sites()[2]);
    }
}
