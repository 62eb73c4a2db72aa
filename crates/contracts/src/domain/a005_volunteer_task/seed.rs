use once_cell::sync::Lazy;

use super::aggregate::VolunteerTask;
use crate::enums::{TaskPriority, TaskStatus};

static TASKS: Lazy<Vec<VolunteerTask>> = Lazy::new(|| {
    let task = |id: &str,
                description: &str,
                location: &str,
                assignee: &str,
                priority: TaskPriority,
                due_date: &str,
                status: TaskStatus,
                equipment: &[&str]| VolunteerTask {
        id: id.into(),
        description: description.into(),
        location: location.into(),
        assignee: assignee.into(),
        priority,
        due_date: due_date.into(),
        status,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
    };

    vec![
        task(
            "TSK-001",
            "Resample Water Source",
            "Majuli Village Well #3",
            "Ravi Kumar",
            TaskPriority::High,
            "Today 2:00 PM",
            TaskStatus::InProgress,
            &["pH strips", "Sample bottles", "GPS device"],
        ),
        task(
            "TSK-002",
            "Distribute ORS Packets",
            "Dibrugarh Community Center",
            "Priya Das",
            TaskPriority::Medium,
            "Tomorrow 10:00 AM",
            TaskStatus::Assigned,
            &["ORS packets (50)", "Information leaflets"],
        ),
        task(
            "TSK-003",
            "Community Health Education",
            "Golaghat School",
            "Sunita Borah",
            TaskPriority::Low,
            "Sept 25, 3:00 PM",
            TaskStatus::Planned,
            &["Educational materials", "Projector", "Handouts"],
        ),
    ]
});

pub fn volunteer_tasks() -> &'static [VolunteerTask] {
    &TASKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::classify::{Classify, DisplayCategory};
    use crate::shared::filter::{count_with_status, filter_entities, FilterCriteria};

    #[test]
    fn test_seed() {
        let tasks = volunteer_tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].equipment_label(), "pH strips, Sample bottles, GPS device");
        assert_eq!(count_with_status(tasks, TaskStatus::Completed), 0);
    }

    #[test]
    fn test_filter_by_status() {
        let found = filter_entities(volunteer_tasks(), &FilterCriteria::status(TaskStatus::Assigned));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].assignee, "Priya Das");
    }

    #[test]
    fn test_badges() {
        let task = &volunteer_tasks()[0];
        assert_eq!(task.priority.category(), DisplayCategory::Danger);
        assert_eq!(task.status.category(), DisplayCategory::Primary);
        assert_eq!(volunteer_tasks()[2].status.category(), DisplayCategory::Muted);
        assert_eq!(volunteer_tasks()[2].priority.category(), DisplayCategory::Primary);
    }

    #[test]
    fn test_json_contract() {
        let json = serde_json::to_value(&volunteer_tasks()[0]).unwrap();
        assert_eq!(json["task"], "Resample Water Source");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["dueDate"], "Today 2:00 PM");
    }
}
