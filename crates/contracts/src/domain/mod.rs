pub mod a001_monitored_site;
pub mod a002_sensor_station;
pub mod a003_alert;
pub mod a004_community_report;
pub mod a005_volunteer_task;
pub mod a006_risk_forecast;
pub mod common;
