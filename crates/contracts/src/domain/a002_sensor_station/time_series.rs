//! Deterministic sensor history for the time series chart.
//!
//! The series is synthesised from phase-shifted sine waves so that every
//! render shows the same 48 half-hour samples.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::Parameter;

pub const SERIES_POINTS: usize = 48;
pub const SERIES_STEP_MINUTES: i64 = 30;

/// Instant all relative labels on the dashboard are measured from
pub fn snapshot_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 22)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap_or_default()
}

/// Acceptable band drawn as reference lines on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterThreshold {
    pub min: f64,
    pub max: f64,
}

impl ParameterThreshold {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// "6.5 - 8.5", "0 - 500 ppm"
    pub fn range_label(&self, unit: &str) -> String {
        if unit.is_empty() {
            format!("{} - {}", self.min, self.max)
        } else {
            format!("{} - {} {}", self.min, self.max, unit)
        }
    }
}

pub fn parameter_threshold(parameter: Parameter) -> ParameterThreshold {
    let (min, max) = match parameter {
        Parameter::Ph => (6.5, 8.5),
        Parameter::Tds => (0.0, 500.0),
        Parameter::Turbidity => (0.0, 5.0),
        Parameter::Temperature => (15.0, 35.0),
        Parameter::Conductivity => (0.0, 1000.0),
        Parameter::Bacterial => (0.0, 10.0),
    };
    ParameterThreshold { min, max }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    /// "HH:MM" axis label
    pub label: String,
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
    pub temperature: f64,
    pub conductivity: f64,
    pub bacterial: f64,
}

impl SeriesPoint {
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Tds => self.tds,
            Parameter::Turbidity => self.turbidity,
            Parameter::Temperature => self.temperature,
            Parameter::Conductivity => self.conductivity,
            Parameter::Bacterial => self.bacterial,
        }
    }
}

/// 48 samples at 30-minute spacing, the last one at `end`.
pub fn generate_series(end: NaiveDateTime) -> Vec<SeriesPoint> {
    (0..SERIES_POINTS)
        .rev()
        .map(|back| {
            let i = back as f64;
            let timestamp = end - Duration::minutes(back as i64 * SERIES_STEP_MINUTES);
            // every sixth sample carries a contamination spike
            let bacterial = if back % 6 == 0 {
                18.0
            } else {
                2.5 + (i * 0.25).sin() * 2.5
            };
            SeriesPoint {
                timestamp,
                label: timestamp.format("%H:%M").to_string(),
                ph: 6.5 + (i * 0.1).sin() * 0.8,
                tds: 300.0 + (i * 0.15).sin() * 50.0,
                turbidity: 5.0 + (i * 0.2).sin() * 3.0,
                temperature: 25.0 + (i * 0.08).sin() * 2.0,
                conductivity: 450.0 + (i * 0.12).sin() * 80.0,
                bacterial,
            }
        })
        .collect()
}

/// Samples of `parameter` outside its threshold band
pub fn count_anomalies(series: &[SeriesPoint], parameter: Parameter) -> usize {
    let band = parameter_threshold(parameter);
    series
        .iter()
        .filter(|p| !band.contains(p.value(parameter)))
        .count()
}

/// (min, max) of the plotted values, widened to include the threshold band
pub fn value_bounds(series: &[SeriesPoint], parameters: &[Parameter]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in series {
        for p in parameters {
            let v = point.value(*p);
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if let [single] = parameters {
        let band = parameter_threshold(*single);
        lo = lo.min(band.min);
        hi = hi.max(band.max);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_has_48_points_at_30_minute_spacing() {
        let end = snapshot_time();
        let series = generate_series(end);
        assert_eq!(series.len(), 48);
        assert_eq!(series.last().unwrap().timestamp, end);
        assert_eq!(series.last().unwrap().label, "14:30");
        assert_eq!(series[0].timestamp, end - Duration::minutes(47 * 30));
        for pair in series.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(30));
        }
    }

    #[test]
    fn test_series_is_deterministic() {
        let end = snapshot_time();
        assert_eq!(generate_series(end), generate_series(end));
    }

    #[test]
    fn test_last_sample_is_baseline() {
        let last = generate_series(snapshot_time()).pop().unwrap();
        assert_eq!(last.ph, 6.5);
        assert_eq!(last.tds, 300.0);
        assert_eq!(last.bacterial, 18.0);
    }

    #[test]
    fn test_thresholds_and_labels() {
        assert_eq!(parameter_threshold(Parameter::Ph).range_label(""), "6.5 - 8.5");
        assert_eq!(parameter_threshold(Parameter::Tds).range_label("ppm"), "0 - 500 ppm");
        assert!(parameter_threshold(Parameter::Temperature).contains(15.0));
        assert!(!parameter_threshold(Parameter::Bacterial).contains(10.5));
    }

    #[test]
    fn test_anomalies() {
        let series = generate_series(snapshot_time());
        assert_eq!(count_anomalies(&series, Parameter::Bacterial), 8);
        assert_eq!(count_anomalies(&series, Parameter::Tds), 0);
        assert!(count_anomalies(&series, Parameter::Turbidity) > 0);
    }

    #[test]
    fn test_value_bounds_include_threshold_for_single_parameter() {
        let series = generate_series(snapshot_time());
        let (lo, hi) = value_bounds(&series, &[Parameter::Ph]);
        assert!(lo < 5.8);
        assert!(hi >= 8.5);
        assert_eq!(value_bounds(&[], &[Parameter::Ph]), (6.5, 8.5));
        assert_eq!(value_bounds(&[], &[]), (0.0, 1.0));
    }
}
