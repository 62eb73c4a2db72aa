use serde::{Deserialize, Serialize};

use crate::enums::{Channel, ReportStatus, Severity};
use crate::shared::filter::{HasStatus, Searchable};

// ============================================================================
// Aggregate
// ============================================================================

/// Symptom report submitted by the community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityReport {
    pub id: String,
    #[serde(rename = "type")]
    pub source: Channel,
    pub location: String,
    pub volunteer: String,
    pub timestamp: String,
    pub status: ReportStatus,
    pub severity: Severity,
    pub symptoms: String,
    pub follow_up: String,
    pub contact: String,
}

impl Searchable for CommunityReport {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.location.as_str(),
            self.volunteer.as_str(),
            self.symptoms.as_str(),
            self.id.as_str(),
        ]
    }
}

impl HasStatus for CommunityReport {
    type Status = ReportStatus;

    fn status(&self) -> ReportStatus {
        self.status
    }
}

/// Number of reports per source channel, in `Channel::all()` order
pub fn source_counts(reports: &[CommunityReport]) -> Vec<(Channel, usize)> {
    Channel::all()
        .into_iter()
        .map(|channel| {
            let n = reports.iter().filter(|r| r.source == channel).count();
            (channel, n)
        })
        .collect()
}
