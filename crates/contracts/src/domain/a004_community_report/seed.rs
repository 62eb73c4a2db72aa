use once_cell::sync::Lazy;

use super::aggregate::CommunityReport;
use super::chatbot::{ChatbotIntent, TopQuestion};
use crate::enums::{Channel, ReportStatus, Severity, Trend};

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    source: Channel,
    location: &str,
    volunteer: &str,
    timestamp: &str,
    status: ReportStatus,
    severity: Severity,
    symptoms: &str,
    follow_up: &str,
    contact: &str,
) -> CommunityReport {
    CommunityReport {
        id: id.into(),
        source,
        location: location.into(),
        volunteer: volunteer.into(),
        timestamp: timestamp.into(),
        status,
        severity,
        symptoms: symptoms.into(),
        follow_up: follow_up.into(),
        contact: contact.into(),
    }
}

static REPORTS: Lazy<Vec<CommunityReport>> = Lazy::new(|| {
    vec![
        report(
            "RPT-001",
            Channel::Sms,
            "Majuli Village - Ward 3",
            "Ravi Kumar",
            "25 min ago",
            ReportStatus::Pending,
            Severity::High,
            "Diarrhea, vomiting in 5 households",
            "Field visit scheduled",
            "+91-9876543210",
        ),
        report(
            "RPT-002",
            Channel::Ivr,
            "Dibrugarh - Health Center",
            "Priya Das",
            "1 hour ago",
            ReportStatus::Verified,
            Severity::Medium,
            "Stomach pain reported by 3 families",
            "Water sample collected",
            "+91-9876543211",
        ),
        report(
            "RPT-003",
            Channel::Chatbot,
            "Golaghat School Area",
            "Community Member",
            "2 hours ago",
            ReportStatus::Resolved,
            Severity::Low,
            "Mild stomach discomfort after drinking well water",
            "Advisory sent, monitoring continues",
            "Anonymous",
        ),
        report(
            "RPT-004",
            Channel::FieldVisit,
            "Jorhat Rural - Block A",
            "Amit Singh",
            "4 hours ago",
            ReportStatus::Investigating,
            Severity::High,
            "Multiple cases of fever and diarrhea",
            "Health team dispatched",
            "+91-9876543212",
        ),
    ]
});

static INTENTS: Lazy<Vec<ChatbotIntent>> = Lazy::new(|| {
    [
        ("Water Quality Inquiry", 156, Trend::Up),
        ("Symptom Reporting", 89, Trend::Stable),
        ("Treatment Guidance", 67, Trend::Up),
        ("Emergency Contact", 23, Trend::Down),
        ("Prevention Tips", 145, Trend::Up),
    ]
    .into_iter()
    .map(|(intent, count, trend)| ChatbotIntent {
        intent: intent.into(),
        count,
        trend,
    })
    .collect()
});

static QUESTIONS: Lazy<Vec<TopQuestion>> = Lazy::new(|| {
    [
        ("Is my water safe to drink?", 89),
        ("What should I do if I feel sick?", 67),
        ("How do I report water problems?", 45),
        ("Where can I get clean water?", 34),
    ]
    .into_iter()
    .map(|(question, count)| TopQuestion {
        question: question.into(),
        count,
    })
    .collect()
});

pub fn community_reports() -> &'static [CommunityReport] {
    &REPORTS
}

pub fn chatbot_intents() -> &'static [ChatbotIntent] {
    &INTENTS
}

pub fn top_questions() -> &'static [TopQuestion] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_community_report::source_counts;
    use crate::shared::classify::{Classify, DisplayCategory};
    use crate::shared::filter::{filter_entities, FilterCriteria, StatusFilter};

    #[test]
    fn test_search_by_volunteer_and_symptom() {
        let by_volunteer = filter_entities(community_reports(), &FilterCriteria::text("priya"));
        assert_eq!(by_volunteer.len(), 1);
        assert_eq!(by_volunteer[0].id, "RPT-002");

        let by_symptom = filter_entities(community_reports(), &FilterCriteria::text("diarrhea"));
        let ids: Vec<&str> = by_symptom.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT-001", "RPT-004"]);
    }

    #[test]
    fn test_search_with_status() {
        let criteria = FilterCriteria::new(
            "diarrhea",
            StatusFilter::parse("investigating", ReportStatus::from_code),
        );
        let found = filter_entities(community_reports(), &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].volunteer, "Amit Singh");
    }

    #[test]
    fn test_one_report_per_source() {
        let counts = source_counts(community_reports());
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, n)| *n == 1));
        assert_eq!(counts[3].0, Channel::FieldVisit);
    }

    #[test]
    fn test_badges() {
        let pending = &community_reports()[0];
        assert_eq!(pending.status.category(), DisplayCategory::Danger);
        assert_eq!(pending.severity.category(), DisplayCategory::Danger);
        assert_eq!(pending.source.category(), DisplayCategory::Primary);
        assert_eq!(community_reports()[2].severity.category(), DisplayCategory::Success);
    }

    #[test]
    fn test_chatbot_seed() {
        assert_eq!(chatbot_intents().len(), 5);
        assert_eq!(chatbot_intents()[3].trend.engagement_category(), DisplayCategory::Danger);
        assert_eq!(top_questions()[0].count, 89);
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&community_reports()[3]).unwrap();
        assert_eq!(json["type"], "Field Visit");
        assert_eq!(json["followUp"], "Health team dispatched");
        assert_eq!(json["status"], "investigating");
    }
}
