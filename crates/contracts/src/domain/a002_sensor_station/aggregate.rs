use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{GpsState, LinkState, Parameter, ReadingStatus, SensorStatus, SignalQuality};
use crate::shared::filter::{HasStatus, Searchable};

/// Latest value of one parameter at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub value: f64,
    pub unit: String,
    pub safe_range: String,
    /// WHO/BIS compliance, percent
    pub compliance: u8,
    pub status: ReadingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareHealth {
    /// Solar panel output, percent
    pub solar: u8,
    pub battery: u8,
    pub lora: LinkState,
    pub gps: GpsState,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Field-deployed water-quality sensor station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorStation {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: SensorStatus,
    pub last_reading: String,
    pub battery: u8,
    pub signal: SignalQuality,
    pub calibration_due: bool,
    pub readings: BTreeMap<Parameter, Reading>,
    pub hardware: HardwareHealth,
}

impl SensorStation {
    pub fn reading(&self, parameter: Parameter) -> Option<&Reading> {
        self.readings.get(&parameter)
    }

    /// Worst reading status across all parameters
    pub fn overall_health(&self) -> ReadingStatus {
        let mut worst = ReadingStatus::Normal;
        for reading in self.readings.values() {
            match (worst, reading.status) {
                (_, ReadingStatus::Danger) => return ReadingStatus::Danger,
                (ReadingStatus::Normal, ReadingStatus::Warning) => worst = ReadingStatus::Warning,
                _ => {}
            }
        }
        worst
    }

    pub fn calibration_label(&self) -> &'static str {
        if self.calibration_due {
            "Due"
        } else {
            "OK"
        }
    }
}

/// Stations per overall health, in (healthy, warning, critical) order
pub fn health_summary(stations: &[SensorStation]) -> (usize, usize, usize) {
    stations
        .iter()
        .fold((0, 0, 0), |(ok, warn, crit), s| match s.overall_health() {
            ReadingStatus::Normal => (ok + 1, warn, crit),
            ReadingStatus::Warning => (ok, warn + 1, crit),
            ReadingStatus::Danger => (ok, warn, crit + 1),
        })
}

impl Searchable for SensorStation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str(), self.id.as_str()]
    }
}

impl HasStatus for SensorStation {
    type Status = SensorStatus;

    fn status(&self) -> SensorStatus {
        self.status
    }
}

