use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::{UserRole, UserStatus};
use crate::shared::filter::{HasStatus, Searchable};

/// Operator account listed under Users & Roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: String,
    pub permissions: Vec<String>,
}

impl SystemUser {
    /// "full access", "reports submit"
    pub fn permission_labels(&self) -> Vec<String> {
        self.permissions
            .iter()
            .map(|p| p.replacen('_', " ", 1))
            .collect()
    }
}

impl Searchable for SystemUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl HasStatus for SystemUser {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }
}

static USERS: Lazy<Vec<SystemUser>> = Lazy::new(|| {
    let user = |id: u32,
                name: &str,
                email: &str,
                role: UserRole,
                status: UserStatus,
                last_login: &str,
                permissions: &[&str]| SystemUser {
        id,
        name: name.into(),
        email: email.into(),
        role,
        status,
        last_login: last_login.into(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    };

    vec![
        user(
            1,
            "Dr. Rajesh Kumar",
            "rajesh.kumar@health.gov.in",
            UserRole::Administrator,
            UserStatus::Active,
            "2 hours ago",
            &["full_access"],
        ),
        user(
            2,
            "Priya Sharma",
            "priya.sharma@health.gov.in",
            UserRole::HealthOfficial,
            UserStatus::Active,
            "30 min ago",
            &["alerts", "dispatch", "reports"],
        ),
        user(
            3,
            "Ravi Patel",
            "ravi.patel@volunteer.org",
            UserRole::VolunteerCoordinator,
            UserStatus::Active,
            "1 hour ago",
            &["community", "reports", "tasks"],
        ),
        user(
            4,
            "Amit Singh",
            "amit.singh@field.org",
            UserRole::FieldVolunteer,
            UserStatus::Offline,
            "1 day ago",
            &["reports_submit"],
        ),
    ]
});

pub fn system_users() -> &'static [SystemUser] {
    &USERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::classify::{Classify, DisplayCategory};
    use crate::shared::filter::search_entities;

    #[test]
    fn test_search_by_name_or_email() {
        assert_eq!(search_entities(system_users(), "priya")[0].id, 2);
        assert_eq!(search_entities(system_users(), "health.gov.in").len(), 2);
        assert_eq!(search_entities(system_users(), "").len(), 4);
        assert!(search_entities(system_users(), "nobody").is_empty());
    }

    #[test]
    fn test_permission_labels() {
        assert_eq!(system_users()[0].permission_labels(), vec!["full access"]);
        assert_eq!(system_users()[3].permission_labels(), vec!["reports submit"]);
        assert_eq!(system_users()[1].permission_labels().len(), 3);
    }

    #[test]
    fn test_badges() {
        assert_eq!(system_users()[0].role.category(), DisplayCategory::Danger);
        assert_eq!(system_users()[2].role.category(), DisplayCategory::Secondary);
        assert_eq!(system_users()[3].status.category(), DisplayCategory::Warning);
    }
}
