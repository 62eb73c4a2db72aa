pub mod aggregate;
pub mod seed;
pub mod time_series;

pub use aggregate::{health_summary, HardwareHealth, Reading, SensorStation};
pub use seed::sensor_stations;
pub use time_series::{
    count_anomalies, generate_series, parameter_threshold, snapshot_time, value_bounds, ParameterThreshold,
    SeriesPoint,
};
