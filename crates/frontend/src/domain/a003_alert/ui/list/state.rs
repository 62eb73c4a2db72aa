use contracts::domain::a003_alert::{alerts, Alert};
use contracts::enums::AlertStatus;
use contracts::shared::filter::{count_with_status, filter_entities, FilterCriteria, StatusFilter};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AlertsState {
    pub query: String,
    /// "all" or an alert status code
    pub status_filter: String,
    pub selected_alert: Option<String>,
}

impl Default for AlertsState {
    fn default() -> Self {
        Self {
            query: String::new(),
            status_filter: "all".to_string(),
            selected_alert: None,
        }
    }
}

impl AlertsState {
    pub fn visible_alerts(&self) -> Vec<Alert> {
        let criteria = FilterCriteria::new(
            self.query.clone(),
            StatusFilter::parse(&self.status_filter, AlertStatus::from_code),
        );
        filter_entities(alerts(), &criteria).into_iter().cloned().collect()
    }

    pub fn selected(&self) -> Option<Alert> {
        let id = self.selected_alert.as_deref()?;
        alerts().iter().find(|a| a.id == id).cloned()
    }
}

/// Alerts per status for the summary cards
pub fn status_totals() -> Vec<(AlertStatus, usize)> {
    AlertStatus::all()
        .into_iter()
        .map(|status| (status, count_with_status(alerts(), status)))
        .collect()
}

pub fn create_state() -> RwSignal<AlertsState> {
    RwSignal::new(AlertsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_all_alerts() {
        assert_eq!(AlertsState::default().visible_alerts().len(), alerts().len());
    }

    #[test]
    fn test_search_by_village() {
        let state = AlertsState {
            query: "majuli".into(),
            ..AlertsState::default()
        };
        let visible = state.visible_alerts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "ALT-001");
    }

    #[test]
    fn test_status_totals_sum_to_all() {
        let total: usize = status_totals().iter().map(|(_, n)| n).sum();
        assert_eq!(total, alerts().len());
    }

    #[test]
    fn test_selected_alert() {
        let state = AlertsState {
            selected_alert: Some("ALT-002".into()),
            ..AlertsState::default()
        };
        assert_eq!(state.selected().map(|a| a.id), Some("ALT-002".to_string()));
    }
}
