//! SVG geometry for the sensor time series chart.

use contracts::domain::a002_sensor_station::{parameter_threshold, value_bounds, SeriesPoint};
use contracts::enums::Parameter;

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 260.0;
const PADDING: f64 = 32.0;
/// Every n-th sample gets an x-axis label
const LABEL_EVERY: usize = 8;

/// Maps sample index and value to SVG coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub lo: f64,
    pub hi: f64,
    pub points: usize,
}

impl ChartScale {
    pub fn fit(series: &[SeriesPoint], parameters: &[Parameter]) -> Self {
        let (lo, hi) = value_bounds(series, parameters);
        Self {
            lo,
            hi,
            points: series.len(),
        }
    }

    pub fn x(&self, index: usize) -> f64 {
        let span = CHART_WIDTH - 2.0 * PADDING;
        if self.points < 2 {
            return PADDING;
        }
        PADDING + span * index as f64 / (self.points - 1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        let span = CHART_HEIGHT - 2.0 * PADDING;
        let t = (value - self.lo) / (self.hi - self.lo);
        CHART_HEIGHT - PADDING - span * t
    }
}

/// `d` attribute of the polyline for one parameter
pub fn line_path(series: &[SeriesPoint], parameter: Parameter, scale: &ChartScale) -> String {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.1},{:.1}", cmd, scale.x(i), scale.y(point.value(parameter)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// y of the (min, max) reference lines of a parameter's acceptable band
pub fn threshold_lines(parameter: Parameter, scale: &ChartScale) -> (f64, f64) {
    let band = parameter_threshold(parameter);
    (scale.y(band.min), scale.y(band.max))
}

/// (x, "HH:MM") ticks along the time axis
pub fn axis_ticks(series: &[SeriesPoint], scale: &ChartScale) -> Vec<(f64, String)> {
    series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % LABEL_EVERY == 0 || *i + 1 == series.len())
        .map(|(i, point)| (scale.x(i), point.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_sensor_station::{generate_series, snapshot_time};

    #[test]
    fn test_line_path_has_one_command_per_sample() {
        let series = generate_series(snapshot_time());
        let scale = ChartScale::fit(&series, &[Parameter::Ph]);
        let path = line_path(&series, Parameter::Ph, &scale);
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('L').count(), 47);
    }

    #[test]
    fn test_points_stay_inside_chart() {
        let series = generate_series(snapshot_time());
        let scale = ChartScale::fit(&series, &Parameter::all());
        for (i, point) in series.iter().enumerate() {
            for p in Parameter::all() {
                let y = scale.y(point.value(p));
                assert!((0.0..=CHART_HEIGHT).contains(&y), "{:?} at {}", p, i);
            }
            assert!((0.0..=CHART_WIDTH).contains(&scale.x(i)));
        }
    }

    #[test]
    fn test_threshold_band_is_drawn_for_single_parameter() {
        let series = generate_series(snapshot_time());
        let scale = ChartScale::fit(&series, &[Parameter::Bacterial]);
        let (y_min, y_max) = threshold_lines(Parameter::Bacterial, &scale);
        assert!(y_max < y_min);
        assert!(y_max >= 0.0 && y_min <= CHART_HEIGHT);
    }

    #[test]
    fn test_axis_ticks_end_at_snapshot() {
        let series = generate_series(snapshot_time());
        let scale = ChartScale::fit(&series, &[Parameter::Tds]);
        let ticks = axis_ticks(&series, &scale);
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks.last().map(|t| t.1.as_str()), Some("14:30"));
    }

    #[test]
    fn test_empty_series_is_harmless() {
        let scale = ChartScale::fit(&[], &[Parameter::Ph]);
        assert_eq!(line_path(&[], Parameter::Ph, &scale), "");
        assert_eq!(scale.x(0), 32.0);
    }
}
