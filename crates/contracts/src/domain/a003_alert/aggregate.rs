use serde::{Deserialize, Serialize};

use crate::domain::common::GeoPoint;
use crate::enums::{AlertSeverity, AlertStatus, Channel, DispatchStatus};
use crate::shared::filter::{HasStatus, Searchable};

/// Outreach counters, one shape per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResponseCounters {
    #[serde(rename = "SMS")]
    Sms { sent: u32, delivered: u32 },
    #[serde(rename = "IVR")]
    Ivr { calls: u32, completed: u32 },
    #[serde(rename = "Chatbot")]
    Chatbot { interactions: u32 },
    #[serde(rename = "Field Visit")]
    FieldVisit { visits: u32 },
}

impl ResponseCounters {
    pub fn channel(&self) -> Channel {
        match self {
            ResponseCounters::Sms { .. } => Channel::Sms,
            ResponseCounters::Ivr { .. } => Channel::Ivr,
            ResponseCounters::Chatbot { .. } => Channel::Chatbot,
            ResponseCounters::FieldVisit { .. } => Channel::FieldVisit,
        }
    }

    /// "Sent: 145 • Delivered: 142"
    pub fn summary(&self) -> String {
        match self {
            ResponseCounters::Sms { sent, delivered } => {
                format!("Sent: {} \u{2022} Delivered: {}", sent, delivered)
            }
            ResponseCounters::Ivr { calls, completed } => {
                format!("Calls: {} \u{2022} Completed: {}", calls, completed)
            }
            ResponseCounters::Chatbot { interactions } => format!("Interactions: {}", interactions),
            ResponseCounters::FieldVisit { visits } => format!("Visits: {}", visits),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAction {
    #[serde(flatten)]
    pub counters: ResponseCounters,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOrder {
    pub id: String,
    pub item: String,
    pub quantity: u32,
    pub status: DispatchStatus,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Contamination alert raised for a village
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub village: String,
    #[serde(rename = "type")]
    pub category: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub timestamp: String,
    pub description: String,
    pub affected_population: u32,
    pub coordinates: GeoPoint,
    pub responses: Vec<ResponseAction>,
    pub dispatch_orders: Vec<DispatchOrder>,
}

impl Alert {
    /// "2 response types"
    pub fn responses_label(&self) -> String {
        match self.responses.len() {
            1 => "1 response type".to_string(),
            n => format!("{} response types", n),
        }
    }

    pub fn total_dispatched_quantity(&self) -> u32 {
        self.dispatch_orders.iter().map(|o| o.quantity).sum()
    }
}

impl Searchable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.village.as_str(),
            self.category.as_str(),
            self.id.as_str(),
            self.description.as_str(),
        ]
    }
}

impl HasStatus for Alert {
    type Status = AlertStatus;

    fn status(&self) -> AlertStatus {
        self.status
    }
}

