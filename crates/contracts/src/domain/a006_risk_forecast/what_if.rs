//! What-if panel of the forecast page. The sliders only move their own
//! values; the displayed outcome is a fixed illustration.

use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const TURBIDITY_RANGE: SliderRange = SliderRange { min: 0.0, max: 100.0 };
pub const RAINFALL_RANGE: SliderRange = SliderRange { min: 0.0, max: 50.0 };
pub const TEMPERATURE_RANGE: SliderRange = SliderRange { min: 15.0, max: 45.0 };

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfScenario {
    /// NTU
    pub turbidity: f64,
    /// mm
    pub rainfall: f64,
    /// °C
    pub temperature: f64,
}

impl Default for WhatIfScenario {
    fn default() -> Self {
        Self {
            turbidity: 25.0,
            rainfall: 12.0,
            temperature: 28.0,
        }
    }
}

impl WhatIfScenario {
    pub fn set_turbidity(&mut self, value: f64) {
        self.turbidity = TURBIDITY_RANGE.clamp(value);
    }

    pub fn set_rainfall(&mut self, value: f64) {
        self.rainfall = RAINFALL_RANGE.clamp(value);
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = TEMPERATURE_RANGE.clamp(value);
    }

    /// Outcome shown beside the sliders. Independent of the slider values.
    pub fn simulated_outcome(&self) -> SimulatedRisk {
        SimulatedRisk {
            level: RiskLevel::Medium,
            confidence: 74,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedRisk {
    pub level: RiskLevel,
    pub confidence: u8,
}

impl SimulatedRisk {
    /// "Medium Risk"
    pub fn headline(&self) -> String {
        format!("{} Risk", self.level.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scenario = WhatIfScenario::default();
        assert_eq!(scenario.turbidity, 25.0);
        assert_eq!(scenario.rainfall, 12.0);
        assert_eq!(scenario.temperature, 28.0);
    }

    #[test]
    fn test_sliders_clamp() {
        let mut scenario = WhatIfScenario::default();
        scenario.set_turbidity(140.0);
        scenario.set_rainfall(-3.0);
        scenario.set_temperature(10.0);
        assert_eq!(scenario.turbidity, 100.0);
        assert_eq!(scenario.rainfall, 0.0);
        assert_eq!(scenario.temperature, 15.0);
    }

    #[test]
    fn test_outcome_is_static() {
        let mut scenario = WhatIfScenario::default();
        let before = scenario.simulated_outcome();
        scenario.set_turbidity(90.0);
        assert_eq!(scenario.simulated_outcome(), before);
        assert_eq!(before.headline(), "Medium Risk");
        assert_eq!(before.confidence, 74);
    }
}
