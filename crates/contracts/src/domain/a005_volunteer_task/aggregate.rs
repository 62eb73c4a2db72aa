use serde::{Deserialize, Serialize};

use crate::enums::{TaskPriority, TaskStatus};
use crate::shared::filter::{HasStatus, Searchable};

// ============================================================================
// Aggregate
// ============================================================================

/// Field assignment for a volunteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerTask {
    pub id: String,
    #[serde(rename = "task")]
    pub description: String,
    pub location: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub due_date: String,
    pub status: TaskStatus,
    pub equipment: Vec<String>,
}

impl VolunteerTask {
    pub fn equipment_label(&self) -> String {
        self.equipment.join(", ")
    }
}

impl Searchable for VolunteerTask {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.location.as_str(),
            self.assignee.as_str(),
            self.id.as_str(),
        ]
    }
}

impl HasStatus for VolunteerTask {
    type Status = TaskStatus;

    fn status(&self) -> TaskStatus {
        self.status
    }
}

