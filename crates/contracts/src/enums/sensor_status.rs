use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::classify::{Classify, DisplayCategory};

/// Connectivity of a sensor station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Online,
    Offline,
    Maintenance,
}

impl SensorStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SensorStatus::Online => "online",
            SensorStatus::Offline => "offline",
            SensorStatus::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SensorStatus::Online => "Online",
            SensorStatus::Offline => "Offline",
            SensorStatus::Maintenance => "Maintenance",
        }
    }

    pub fn all() -> Vec<SensorStatus> {
        vec![SensorStatus::Online, SensorStatus::Offline, SensorStatus::Maintenance]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "online" => Some(SensorStatus::Online),
            "offline" => Some(SensorStatus::Offline),
            "maintenance" => Some(SensorStatus::Maintenance),
            _ => None,
        }
    }
}

impl Classify for SensorStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            SensorStatus::Online => DisplayCategory::SensorOnline,
            SensorStatus::Offline => DisplayCategory::SensorOffline,
            SensorStatus::Maintenance => DisplayCategory::Warning,
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status of a single parameter reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Normal,
    Warning,
    Danger,
}

impl ReadingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReadingStatus::Normal => "normal",
            ReadingStatus::Warning => "warning",
            ReadingStatus::Danger => "danger",
        }
    }

    /// Label on the live parameter cards
    pub fn display_name(&self) -> &'static str {
        match self {
            ReadingStatus::Normal => "Safe",
            ReadingStatus::Warning => "Warning",
            ReadingStatus::Danger => "Critical",
        }
    }

    pub fn all() -> Vec<ReadingStatus> {
        vec![ReadingStatus::Normal, ReadingStatus::Warning, ReadingStatus::Danger]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "normal" => Some(ReadingStatus::Normal),
            "warning" => Some(ReadingStatus::Warning),
            "danger" => Some(ReadingStatus::Danger),
            _ => None,
        }
    }
}

impl Classify for ReadingStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            ReadingStatus::Normal => DisplayCategory::Success,
            ReadingStatus::Warning => DisplayCategory::Warning,
            ReadingStatus::Danger => DisplayCategory::Danger,
        }
    }
}

/// Radio signal quality reported by a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalQuality {
    Excellent,
    Strong,
    Weak,
    None,
}

impl SignalQuality {
    pub fn code(&self) -> &'static str {
        match self {
            SignalQuality::Excellent => "excellent",
            SignalQuality::Strong => "strong",
            SignalQuality::Weak => "weak",
            SignalQuality::None => "none",
        }
    }

    pub fn all() -> Vec<SignalQuality> {
        vec![
            SignalQuality::Excellent,
            SignalQuality::Strong,
            SignalQuality::Weak,
            SignalQuality::None,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "excellent" => Some(SignalQuality::Excellent),
            "strong" => Some(SignalQuality::Strong),
            "weak" => Some(SignalQuality::Weak),
            "none" => Some(SignalQuality::None),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self, SignalQuality::None)
    }
}

impl Classify for SignalQuality {
    fn category(&self) -> DisplayCategory {
        match self {
            SignalQuality::Excellent | SignalQuality::Strong => DisplayCategory::Success,
            SignalQuality::Weak => DisplayCategory::Warning,
            SignalQuality::None => DisplayCategory::Danger,
        }
    }
}

/// LoRa uplink state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Connected,
    Intermittent,
    Disconnected,
}

impl LinkState {
    pub fn code(&self) -> &'static str {
        match self {
            LinkState::Connected => "connected",
            LinkState::Intermittent => "intermittent",
            LinkState::Disconnected => "disconnected",
        }
    }

    pub fn all() -> Vec<LinkState> {
        vec![LinkState::Connected, LinkState::Intermittent, LinkState::Disconnected]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "connected" => Some(LinkState::Connected),
            "intermittent" => Some(LinkState::Intermittent),
            "disconnected" => Some(LinkState::Disconnected),
            _ => None,
        }
    }
}

impl Classify for LinkState {
    fn category(&self) -> DisplayCategory {
        match self {
            LinkState::Connected => DisplayCategory::Success,
            LinkState::Intermittent => DisplayCategory::Warning,
            LinkState::Disconnected => DisplayCategory::Danger,
        }
    }
}

/// GPS module state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpsState {
    Active,
    Inactive,
}

impl GpsState {
    pub fn code(&self) -> &'static str {
        match self {
            GpsState::Active => "active",
            GpsState::Inactive => "inactive",
        }
    }

    pub fn all() -> Vec<GpsState> {
        vec![GpsState::Active, GpsState::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(GpsState::Active),
            "inactive" => Some(GpsState::Inactive),
            _ => None,
        }
    }
}

impl Classify for GpsState {
    fn category(&self) -> DisplayCategory {
        match self {
            GpsState::Active => DisplayCategory::Success,
            GpsState::Inactive => DisplayCategory::Danger,
        }
    }
}

/// Measured water-quality parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Ph,
    Tds,
    Turbidity,
    Temperature,
    Conductivity,
    Bacterial,
}

impl Parameter {
    pub fn code(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Tds => "tds",
            Parameter::Turbidity => "turbidity",
            Parameter::Temperature => "temperature",
            Parameter::Conductivity => "conductivity",
            Parameter::Bacterial => "bacterial",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Tds => "TDS",
            Parameter::Turbidity => "Turbidity",
            Parameter::Temperature => "Temperature",
            Parameter::Conductivity => "Conductivity",
            Parameter::Bacterial => "Bacterial",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Tds => "ppm",
            Parameter::Turbidity => "NTU",
            Parameter::Temperature => "\u{b0}C",
            Parameter::Conductivity => "\u{b5}S/cm",
            Parameter::Bacterial => "CFU/100ml",
        }
    }

    /// Line colour on the time series chart
    pub fn chart_color(&self) -> &'static str {
        match self {
            Parameter::Ph => "#3b82f6",
            Parameter::Tds => "#10b981",
            Parameter::Turbidity => "#ef4444",
            Parameter::Temperature => "#f59e0b",
            Parameter::Conductivity => "#8b5cf6",
            Parameter::Bacterial => "#ec4899",
        }
    }

    pub fn all() -> Vec<Parameter> {
        vec![
            Parameter::Ph,
            Parameter::Tds,
            Parameter::Turbidity,
            Parameter::Temperature,
            Parameter::Conductivity,
            Parameter::Bacterial,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ph" => Some(Parameter::Ph),
            "tds" => Some(Parameter::Tds),
            "turbidity" => Some(Parameter::Turbidity),
            "temperature" => Some(Parameter::Temperature),
            "conductivity" => Some(Parameter::Conductivity),
            "bacterial" => Some(Parameter::Bacterial),
            _ => None,
        }
    }
}
