use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::classify::{Classify, DisplayCategory};

/// Role of an operator account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Administrator")]
    Administrator,
    #[serde(rename = "Health Official")]
    HealthOfficial,
    #[serde(rename = "Volunteer Coordinator")]
    VolunteerCoordinator,
    #[serde(rename = "Field Volunteer")]
    FieldVolunteer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Administrator => "Administrator",
            UserRole::HealthOfficial => "Health Official",
            UserRole::VolunteerCoordinator => "Volunteer Coordinator",
            UserRole::FieldVolunteer => "Field Volunteer",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Administrator,
            UserRole::HealthOfficial,
            UserRole::VolunteerCoordinator,
            UserRole::FieldVolunteer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Administrator" => Some(UserRole::Administrator),
            "Health Official" => Some(UserRole::HealthOfficial),
            "Volunteer Coordinator" => Some(UserRole::VolunteerCoordinator),
            "Field Volunteer" => Some(UserRole::FieldVolunteer),
            _ => None,
        }
    }
}

impl Classify for UserRole {
    fn category(&self) -> DisplayCategory {
        match self {
            UserRole::Administrator => DisplayCategory::Danger,
            UserRole::HealthOfficial => DisplayCategory::Primary,
            UserRole::VolunteerCoordinator => DisplayCategory::Secondary,
            UserRole::FieldVolunteer => DisplayCategory::Success,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Presence of an account or availability of a language pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Offline,
    Inactive,
}

impl UserStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Offline => "offline",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn all() -> Vec<UserStatus> {
        vec![UserStatus::Active, UserStatus::Offline, UserStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(UserStatus::Active),
            "offline" => Some(UserStatus::Offline),
            "inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

impl Classify for UserStatus {
    fn category(&self) -> DisplayCategory {
        match self {
            UserStatus::Active => DisplayCategory::Success,
            UserStatus::Offline => DisplayCategory::Warning,
            UserStatus::Inactive => DisplayCategory::Muted,
        }
    }
}
