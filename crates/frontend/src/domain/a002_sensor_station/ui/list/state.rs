use contracts::domain::a002_sensor_station::{sensor_stations, SensorStation};
use contracts::enums::{Parameter, SensorStatus};
use contracts::shared::filter::{filter_entities, FilterCriteria, StatusFilter};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SensorsState {
    pub query: String,
    /// "all" or a connectivity status code
    pub status_filter: String,
    /// "all" or a parameter code
    pub parameter: String,
    pub selected_station: Option<String>,
}

impl Default for SensorsState {
    fn default() -> Self {
        Self {
            query: String::new(),
            status_filter: "all".to_string(),
            parameter: "all".to_string(),
            selected_station: None,
        }
    }
}

impl SensorsState {
    pub fn visible_stations(&self) -> Vec<SensorStation> {
        let criteria = FilterCriteria::new(
            self.query.clone(),
            StatusFilter::parse(&self.status_filter, SensorStatus::from_code),
        );
        filter_entities(sensor_stations(), &criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Parameters plotted on the chart
    pub fn plotted_parameters(&self) -> Vec<Parameter> {
        match Parameter::from_code(&self.parameter) {
            Some(p) => vec![p],
            None => Parameter::all(),
        }
    }

    /// Parameter whose threshold lines are drawn, when exactly one is plotted
    pub fn single_parameter(&self) -> Option<Parameter> {
        Parameter::from_code(&self.parameter)
    }

    pub fn selected(&self) -> Option<SensorStation> {
        let id = self.selected_station.as_deref()?;
        sensor_stations().iter().find(|s| s.id == id).cloned()
    }
}

pub fn create_state() -> RwSignal<SensorsState> {
    RwSignal::new(SensorsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_shows_all_stations_and_parameters() {
        let state = SensorsState::default();
        assert_eq!(state.visible_stations().len(), 4);
        assert_eq!(state.plotted_parameters().len(), 6);
        assert!(state.single_parameter().is_none());
    }

    #[test]
    fn test_query_and_status_combine() {
        let state = SensorsState {
            query: "golaghat".into(),
            status_filter: "online".into(),
            ..SensorsState::default()
        };
        assert!(state.visible_stations().is_empty());

        let state = SensorsState {
            query: "golaghat".into(),
            status_filter: "maintenance".into(),
            ..SensorsState::default()
        };
        assert_eq!(state.visible_stations()[0].id, "AQS-003");
    }

    #[test]
    fn test_single_parameter_selection() {
        let state = SensorsState {
            parameter: "turbidity".into(),
            ..SensorsState::default()
        };
        assert_eq!(state.plotted_parameters(), vec![Parameter::Turbidity]);
        assert_eq!(state.single_parameter(), Some(Parameter::Turbidity));
    }

    #[test]
    fn test_selected_station() {
        let state = SensorsState {
            selected_station: Some("AQS-004".into()),
            ..SensorsState::default()
        };
        assert_eq!(state.selected().map(|s| s.name), Some("Jorhat Health Center".to_string()));
    }
}
