use contracts::domain::a001_monitored_site::{monitored_sites, MonitoredSite};
use contracts::enums::SiteStatus;
use contracts::shared::filter::{count_with_status, filter_entities, FilterCriteria, StatusFilter};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MapState {
    /// Select value: "all" or a site status code
    pub status_filter: String,
    pub selected_site: Option<u32>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            status_filter: "all".to_string(),
            selected_site: None,
        }
    }
}

impl MapState {
    pub fn criteria(&self) -> FilterCriteria<SiteStatus> {
        FilterCriteria::new(
            String::new(),
            StatusFilter::parse(&self.status_filter, SiteStatus::from_code),
        )
    }

    pub fn visible_sites(&self) -> Vec<MonitoredSite> {
        filter_entities(monitored_sites(), &self.criteria())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn selected(&self) -> Option<MonitoredSite> {
        let id = self.selected_site?;
        monitored_sites().iter().find(|s| s.id == id).cloned()
    }
}

/// "3 of 4 sites shown"
pub fn shown_label(shown: usize, total: usize) -> String {
    format!("{} of {} sites shown", shown, total)
}

/// (status, number of sites) for the quick stats card
pub fn status_counts() -> Vec<(SiteStatus, usize)> {
    SiteStatus::all()
        .into_iter()
        .map(|status| (status, count_with_status(monitored_sites(), status)))
        .collect()
}

pub fn create_state() -> RwSignal<MapState> {
    RwSignal::new(MapState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_shows_every_site() {
        let state = MapState::default();
        assert_eq!(state.visible_sites().len(), monitored_sites().len());
        assert_eq!(shown_label(4, 4), "4 of 4 sites shown");
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let state = MapState {
            status_filter: "safe".into(),
            selected_site: None,
        };
        let visible = state.visible_sites();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|s| s.status == SiteStatus::Safe));
        let expected: Vec<u32> = monitored_sites()
            .iter()
            .filter(|s| s.status == SiteStatus::Safe)
            .map(|s| s.id)
            .collect();
        assert_eq!(visible.iter().map(|s| s.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_unknown_filter_value_shows_nothing() {
        let state = MapState {
            status_filter: "flooded".into(),
            selected_site: None,
        };
        assert!(state.visible_sites().is_empty());
    }

    #[test]
    fn test_status_counts_cover_all_sites() {
        let total: usize = status_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, monitored_sites().len());
    }

    #[test]
    fn test_selected_site_lookup() {
        let state = MapState {
            status_filter: "all".into(),
            selected_site: Some(1),
        };
        assert_eq!(state.selected().map(|s| s.name), Some("Majuli Village Well".to_string()));
        let missing = MapState {
            selected_site: Some(999),
            ..MapState::default()
        };
        assert!(missing.selected().is_none());
    }
}
