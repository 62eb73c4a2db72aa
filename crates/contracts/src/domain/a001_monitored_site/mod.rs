pub mod aggregate;
pub mod seed;

pub use aggregate::{MonitoredSite, SiteMeasurements, WeatherSnapshot};
pub use seed::{monitored_sites, WEATHER_NOW};
