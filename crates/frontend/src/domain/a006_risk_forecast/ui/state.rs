use contracts::domain::a006_risk_forecast::WhatIfScenario;
use leptos::prelude::*;

/// Slider input; non-numeric text leaves the value untouched
pub fn parse_slider(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn create_state() -> RwSignal<WhatIfScenario> {
    RwSignal::new(WhatIfScenario::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slider() {
        assert_eq!(parse_slider("42"), Some(42.0));
        assert_eq!(parse_slider("12.5"), Some(12.5));
        assert_eq!(parse_slider(""), None);
        assert_eq!(parse_slider("inf"), None);
    }

    #[test]
    fn test_slider_values_are_clamped() {
        let mut scenario = WhatIfScenario::default();
        if let Some(v) = parse_slider("150") {
            scenario.set_turbidity(v);
        }
        assert_eq!(scenario.turbidity, 100.0);
        if let Some(v) = parse_slider("5") {
            scenario.set_temperature(v);
        }
        assert_eq!(scenario.temperature, 15.0);
    }
}
