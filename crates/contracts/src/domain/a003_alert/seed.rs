use once_cell::sync::Lazy;

use super::aggregate::{Alert, DispatchOrder, ResponseAction, ResponseCounters};
use super::inventory::InventoryItem;
use crate::domain::common::GeoPoint;
use crate::enums::{AlertSeverity, AlertStatus, DispatchStatus};

fn response(counters: ResponseCounters, language: &str) -> ResponseAction {
    ResponseAction {
        counters,
        language: language.into(),
    }
}

fn order(id: &str, item: &str, quantity: u32, status: DispatchStatus) -> DispatchOrder {
    DispatchOrder {
        id: id.into(),
        item: item.into(),
        quantity,
        status,
    }
}

static ALERTS: Lazy<Vec<Alert>> = Lazy::new(|| {
    vec![
        Alert {
            id: "ALT-001".into(),
            village: "Majuli Village".into(),
            category: "Bacterial Contamination".into(),
            severity: AlertSeverity::Critical,
            status: AlertStatus::Active,
            timestamp: "15 min ago".into(),
            description: "E. coli detected in community well water source".into(),
            affected_population: 1250,
            coordinates: GeoPoint::new(27.0238, 94.2179),
            responses: vec![
                response(ResponseCounters::Sms { sent: 145, delivered: 142 }, "Assamese"),
                response(ResponseCounters::Ivr { calls: 89, completed: 76 }, "Hindi"),
            ],
            dispatch_orders: vec![
                order("DSP-001", "ORS Packets", 500, DispatchStatus::Dispatched),
                order("DSP-002", "Chlorine Tablets", 200, DispatchStatus::Pending),
            ],
        },
        Alert {
            id: "ALT-002".into(),
            village: "Dibrugarh Rural".into(),
            category: "High Turbidity".into(),
            severity: AlertSeverity::Warning,
            status: AlertStatus::Monitoring,
            timestamp: "32 min ago".into(),
            description: "Turbidity levels exceeded WHO guidelines after recent rainfall".into(),
            affected_population: 680,
            coordinates: GeoPoint::new(27.4728, 94.9120),
            responses: vec![response(
                ResponseCounters::Chatbot { interactions: 23 },
                "English",
            )],
            dispatch_orders: vec![order(
                "DSP-003",
                "Water Purification Kits",
                50,
                DispatchStatus::Approved,
            )],
        },
        Alert {
            id: "ALT-003".into(),
            village: "Golaghat Area".into(),
            category: "pH Level Critical".into(),
            severity: AlertSeverity::Critical,
            status: AlertStatus::Resolved,
            timestamp: "1 hour ago".into(),
            description: "pH levels dropped below safe limits - corrective measures applied".into(),
            affected_population: 890,
            coordinates: GeoPoint::new(26.1635, 93.9626),
            responses: vec![
                response(ResponseCounters::Sms { sent: 89, delivered: 87 }, "Assamese"),
                response(ResponseCounters::FieldVisit { visits: 3 }, "Local"),
            ],
            dispatch_orders: vec![order(
                "DSP-004",
                "pH Correction Solution",
                10,
                DispatchStatus::Delivered,
            )],
        },
    ]
});

static INVENTORY: Lazy<Vec<InventoryItem>> = Lazy::new(|| {
    [
        ("ORS Packets", 2500, 500, "packets"),
        ("Chlorine Tablets", 800, 200, "tablets"),
        ("Water Purification Kits", 150, 50, "kits"),
        ("Test Strips pH", 300, 0, "strips"),
        ("Vaccines (Cholera)", 200, 0, "doses"),
        ("Educational Pamphlets", 5000, 0, "pieces"),
    ]
    .into_iter()
    .map(|(item, available, reserved, unit)| InventoryItem {
        item: item.into(),
        available,
        reserved,
        unit: unit.into(),
    })
    .collect()
});

pub fn alerts() -> &'static [Alert] {
    &ALERTS
}

/// Relief stock available to the dispatch team
pub fn dispatch_inventory() -> &'static [InventoryItem] {
    &INVENTORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Channel;
    use crate::shared::classify::{Classify, DisplayCategory};
    use crate::shared::filter::{count_with_status, filter_entities, FilterCriteria, StatusFilter};

    #[test]
    fn test_search_covers_description() {
        let found = filter_entities(alerts(), &FilterCriteria::text("e. coli"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "ALT-001");

        let by_type = filter_entities(alerts(), &FilterCriteria::text("TURBIDITY"));
        assert_eq!(by_type[0].village, "Dibrugarh Rural");
    }

    #[test]
    fn test_status_filter() {
        let active = filter_entities(
            alerts(),
            &FilterCriteria::new("", StatusFilter::parse("active", AlertStatus::from_code)),
        );
        assert_eq!(active.len(), 1);
        assert_eq!(count_with_status(alerts(), AlertStatus::Resolved), 1);

        let unknown = filter_entities(
            alerts(),
            &FilterCriteria::new("", StatusFilter::parse("escalated", AlertStatus::from_code)),
        );
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_response_summaries() {
        let first = &alerts()[0];
        assert_eq!(first.responses_label(), "2 response types");
        assert_eq!(first.responses[0].counters.summary(), "Sent: 145 \u{2022} Delivered: 142");
        assert_eq!(first.responses[1].counters.channel(), Channel::Ivr);
        assert_eq!(alerts()[1].responses_label(), "1 response type");
        assert_eq!(first.total_dispatched_quantity(), 700);
    }

    #[test]
    fn test_badges() {
        let alert = &alerts()[2];
        assert_eq!(alert.severity.category(), DisplayCategory::Danger);
        assert_eq!(alert.status.category(), DisplayCategory::Success);
        assert_eq!(alert.dispatch_orders[0].status.category(), DisplayCategory::Success);
        assert_eq!(alerts()[0].dispatch_orders[1].status.category(), DisplayCategory::Muted);
    }

    #[test]
    fn test_inventory() {
        let free: Vec<u32> = dispatch_inventory().iter().map(|i| i.free_stock()).collect();
        assert_eq!(free, vec![2000, 600, 100, 300, 200, 5000]);
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&alerts()[0]).unwrap();
        assert_eq!(json["type"], "Bacterial Contamination");
        assert_eq!(json["affectedPopulation"], 1250);
        assert_eq!(json["responses"][0]["type"], "SMS");
        assert_eq!(json["responses"][0]["sent"], 145);
        assert_eq!(json["responses"][0]["language"], "Assamese");
        assert_eq!(json["dispatchOrders"][1]["status"], "pending");

        let back: crate::domain::a003_alert::Alert = serde_json::from_value(json).unwrap();
        assert_eq!(&back, &alerts()[0]);
    }
}
