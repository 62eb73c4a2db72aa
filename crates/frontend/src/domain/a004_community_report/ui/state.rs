use contracts::domain::a004_community_report::{community_reports, CommunityReport, ReportDraft};
use contracts::enums::{ReportStatus, Severity};
use contracts::shared::filter::{filter_entities, FilterCriteria, StatusFilter};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CommunityState {
    pub query: String,
    /// "all" or a report status code
    pub status_filter: String,
    pub selected_report: Option<String>,
    pub draft: ReportDraft,
    /// Reports sent from the form during this visit
    pub submitted: usize,
}

impl Default for CommunityState {
    fn default() -> Self {
        Self {
            query: String::new(),
            status_filter: "all".to_string(),
            selected_report: None,
            draft: ReportDraft::default(),
            submitted: 0,
        }
    }
}

impl CommunityState {
    pub fn visible_reports(&self) -> Vec<CommunityReport> {
        let criteria = FilterCriteria::new(
            self.query.clone(),
            StatusFilter::parse(&self.status_filter, ReportStatus::from_code),
        );
        filter_entities(community_reports(), &criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn selected(&self) -> Option<CommunityReport> {
        let id = self.selected_report.as_deref()?;
        community_reports().iter().find(|r| r.id == id).cloned()
    }

    /// Severity select value; an empty string clears it
    pub fn set_draft_severity(&mut self, code: &str) {
        self.draft.severity = Severity::from_code(code);
    }

    /// Accept a complete draft and clear the form. Returns the accepted draft.
    pub fn take_draft(&mut self) -> Option<ReportDraft> {
        if !self.draft.is_complete() {
            return None;
        }
        self.submitted += 1;
        Some(std::mem::take(&mut self.draft))
    }
}

pub fn create_state() -> RwSignal<CommunityState> {
    RwSignal::new(CommunityState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        let state = CommunityState {
            status_filter: "pending".into(),
            ..CommunityState::default()
        };
        assert!(state
            .visible_reports()
            .iter()
            .all(|r| r.status == ReportStatus::Pending));
    }

    #[test]
    fn test_incomplete_draft_is_kept() {
        let mut state = CommunityState::default();
        state.draft.location = "Majuli".into();
        assert!(state.take_draft().is_none());
        assert_eq!(state.draft.location, "Majuli");
        assert_eq!(state.submitted, 0);
    }

    #[test]
    fn test_complete_draft_clears_form() {
        let mut state = CommunityState::default();
        state.draft.location = "Majuli".into();
        state.draft.symptoms = "Fever".into();
        state.set_draft_severity("medium");
        let taken = state.take_draft();
        assert_eq!(taken.and_then(|d| d.severity), Some(Severity::Medium));
        assert_eq!(state.draft, ReportDraft::default());
        assert_eq!(state.submitted, 1);
        // unknown select value clears the severity
        state.set_draft_severity("");
        assert!(state.draft.severity.is_none());
    }
}
