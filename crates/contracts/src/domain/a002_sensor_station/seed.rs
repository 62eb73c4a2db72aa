use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::aggregate::{HardwareHealth, Reading, SensorStation};
use super::time_series::parameter_threshold;
use crate::enums::{GpsState, LinkState, Parameter, ReadingStatus, SensorStatus, SignalQuality};

/// (value, status, compliance) per parameter, in `Parameter::all()` order
type ReadingRow = [(f64, ReadingStatus, u8); 6];

fn readings(row: ReadingRow) -> BTreeMap<Parameter, Reading> {
    Parameter::all()
        .into_iter()
        .zip(row)
        .map(|(parameter, (value, status, compliance))| {
            let unit = parameter.unit();
            let reading = Reading {
                value,
                unit: unit.to_string(),
                safe_range: parameter_threshold(parameter).range_label(unit),
                compliance,
                status,
            };
            (parameter, reading)
        })
        .collect()
}

static STATIONS: Lazy<Vec<SensorStation>> = Lazy::new(|| {
    use ReadingStatus::{Danger, Normal, Warning};

    vec![
        SensorStation {
            id: "AQS-001".into(),
            name: "Majuli Village Station".into(),
            location: "Majuli, Assam".into(),
            status: SensorStatus::Online,
            last_reading: "2 min ago".into(),
            battery: 85,
            signal: SignalQuality::Strong,
            calibration_due: false,
            readings: readings([
                (6.2, Warning, 73),
                (850.0, Danger, 45),
                (45.0, Danger, 10),
                (28.5, Normal, 85),
                (1200.0, Warning, 60),
                (15.0, Danger, 25),
            ]),
            hardware: HardwareHealth {
                solar: 95,
                battery: 85,
                lora: LinkState::Connected,
                gps: GpsState::Active,
            },
        },
        SensorStation {
            id: "AQS-002".into(),
            name: "Dibrugarh Community Station".into(),
            location: "Dibrugarh, Assam".into(),
            status: SensorStatus::Online,
            last_reading: "1 min ago".into(),
            battery: 92,
            signal: SignalQuality::Excellent,
            calibration_due: false,
            readings: readings([
                (7.1, Normal, 92),
                (320.0, Normal, 88),
                (2.0, Normal, 95),
                (26.8, Normal, 92),
                (480.0, Normal, 88),
                (0.0, Normal, 100),
            ]),
            hardware: HardwareHealth {
                solar: 100,
                battery: 92,
                lora: LinkState::Connected,
                gps: GpsState::Active,
            },
        },
        SensorStation {
            id: "AQS-003".into(),
            name: "Golaghat School Station".into(),
            location: "Golaghat, Assam".into(),
            status: SensorStatus::Maintenance,
            last_reading: "2 hours ago".into(),
            battery: 45,
            signal: SignalQuality::Weak,
            calibration_due: true,
            readings: readings([
                (8.3, Warning, 78),
                (680.0, Warning, 65),
                (8.0, Warning, 72),
                (29.2, Normal, 88),
                (920.0, Warning, 68),
                (3.0, Normal, 90),
            ]),
            hardware: HardwareHealth {
                solar: 60,
                battery: 45,
                lora: LinkState::Intermittent,
                gps: GpsState::Active,
            },
        },
        SensorStation {
            id: "AQS-004".into(),
            name: "Jorhat Health Center".into(),
            location: "Jorhat, Assam".into(),
            status: SensorStatus::Offline,
            last_reading: "6 hours ago".into(),
            battery: 12,
            signal: SignalQuality::None,
            calibration_due: false,
            readings: readings([
                (7.4, Normal, 95),
                (280.0, Normal, 92),
                (1.0, Normal, 98),
                (27.1, Normal, 90),
                (420.0, Normal, 95),
                (0.0, Normal, 100),
            ]),
            hardware: HardwareHealth {
                solar: 0,
                battery: 12,
                lora: LinkState::Disconnected,
                gps: GpsState::Inactive,
            },
        },
    ]
});

/// Deployed sensor stations
pub fn sensor_stations() -> &'static [SensorStation] {
    &STATIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_sensor_station::health_summary;
    use crate::shared::classify::{battery_category, Classify, DisplayCategory};
    use crate::shared::filter::{filter_entities, FilterCriteria, StatusFilter};

    #[test]
    fn test_every_station_reports_all_parameters() {
        for station in sensor_stations() {
            assert_eq!(station.readings.len(), 6, "{}", station.id);
        }
        let ph = sensor_stations()[0].reading(Parameter::Ph).unwrap();
        assert_eq!(ph.safe_range, "6.5 - 8.5");
        assert_eq!(ph.unit, "");
        let temp = sensor_stations()[0].reading(Parameter::Temperature).unwrap();
        assert_eq!(temp.safe_range, "15 - 35 \u{b0}C");
    }

    #[test]
    fn test_health_summary_matches_legend() {
        assert_eq!(health_summary(sensor_stations()), (2, 1, 1));
        assert_eq!(sensor_stations()[0].overall_health(), ReadingStatus::Danger);
        assert_eq!(sensor_stations()[2].overall_health(), ReadingStatus::Warning);
    }

    #[test]
    fn test_search_matches_id_name_and_location() {
        let by_id = filter_entities(sensor_stations(), &FilterCriteria::text("aqs-003"));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Golaghat School Station");

        let by_location = filter_entities(sensor_stations(), &FilterCriteria::text("jorhat"));
        assert_eq!(by_location[0].id, "AQS-004");

        assert_eq!(filter_entities(sensor_stations(), &FilterCriteria::text("assam")).len(), 4);
    }

    #[test]
    fn test_search_and_status_combined() {
        let criteria = FilterCriteria::new(
            "station",
            StatusFilter::parse("online", SensorStatus::from_code),
        );
        let ids: Vec<&str> = filter_entities(sensor_stations(), &criteria)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["AQS-001", "AQS-002"]);
    }

    #[test]
    fn test_indicator_palette() {
        let offline = &sensor_stations()[3];
        assert_eq!(offline.status.category(), DisplayCategory::SensorOffline);
        assert_eq!(offline.signal.category(), DisplayCategory::Danger);
        assert_eq!(battery_category(offline.battery), DisplayCategory::Danger);
        assert_eq!(battery_category(sensor_stations()[2].battery), DisplayCategory::Warning);
        assert_eq!(sensor_stations()[2].calibration_label(), "Due");
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&sensor_stations()[0]).unwrap();
        assert_eq!(json["status"], "online");
        assert_eq!(json["signal"], "strong");
        assert_eq!(json["calibrationDue"], false);
        assert_eq!(json["readings"]["tds"]["status"], "danger");
        assert_eq!(json["hardware"]["lora"], "connected");
    }
}
