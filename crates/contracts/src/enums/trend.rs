use serde::{Deserialize, Serialize};

use crate::shared::classify::{Classify, DisplayCategory};

/// Direction of change between two observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    pub fn code(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Stable => "stable",
            Trend::Down => "down",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "\u{2197}",
            Trend::Stable => "\u{2192}",
            Trend::Down => "\u{2198}",
        }
    }

    /// Palette for engagement counters, where growth is good news.
    pub fn engagement_category(&self) -> DisplayCategory {
        match self {
            Trend::Up => DisplayCategory::Success,
            Trend::Stable => DisplayCategory::Muted,
            Trend::Down => DisplayCategory::Danger,
        }
    }

    pub fn all() -> Vec<Trend> {
        vec![Trend::Up, Trend::Stable, Trend::Down]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "up" => Some(Trend::Up),
            "stable" => Some(Trend::Stable),
            "down" => Some(Trend::Down),
            _ => None,
        }
    }
}

/// Risk trend palette: a rising risk is bad news.
impl Classify for Trend {
    fn category(&self) -> DisplayCategory {
        match self {
            Trend::Up => DisplayCategory::Danger,
            Trend::Stable => DisplayCategory::Muted,
            Trend::Down => DisplayCategory::Success,
        }
    }
}
