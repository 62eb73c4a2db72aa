use serde::{Deserialize, Serialize};

use crate::domain::common::GeoPoint;
use crate::enums::{RiskLevel, SiteStatus};
use crate::shared::filter::{HasStatus, Searchable};

// ============================================================================
// Aggregate
// ============================================================================

/// Water source shown on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredSite {
    pub id: u32,
    pub name: String,
    pub position: GeoPoint,
    pub status: SiteStatus,
    pub risk: RiskLevel,
    pub last_reading: String,
    pub measurements: SiteMeasurements,
}

/// Latest laboratory-grade reading at a site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeasurements {
    pub ph: f64,
    /// ppm
    pub tds: f64,
    /// NTU
    pub turbidity: f64,
    /// °C
    pub temperature: f64,
    pub bacterial_detected: bool,
}

impl SiteMeasurements {
    pub fn bacterial_label(&self) -> &'static str {
        if self.bacterial_detected {
            "detected"
        } else {
            "not detected"
        }
    }
}

impl MonitoredSite {
    /// Marker placement on the static map, as percentages of the map box.
    /// Markers are laid out by their position in the visible list.
    pub fn marker_position(index: usize) -> (u32, u32) {
        let i = index as u32;
        (20 + i * 20, 30 + i * 15)
    }

    /// Status label as shown in the details panel ("NEEDS REVIEW")
    pub fn status_banner(&self) -> String {
        self.status.code().replace('-', " ").to_uppercase()
    }
}

impl Searchable for MonitoredSite {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    /// Name substring, or the numeric site id
    fn matches_filter(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.id.to_string().contains(&needle)
    }
}

impl HasStatus for MonitoredSite {
    type Status = SiteStatus;

    fn status(&self) -> SiteStatus {
        self.status
    }
}

/// Weather conditions shown by the map overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub rainfall_mm: f64,
    pub temperature_c: f64,
}
