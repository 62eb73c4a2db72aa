use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationError;

/// Role picked on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginRole {
    Admin,
    HealthOfficial,
    Volunteer,
}

impl LoginRole {
    pub fn code(&self) -> &'static str {
        match self {
            LoginRole::Admin => "admin",
            LoginRole::HealthOfficial => "health-official",
            LoginRole::Volunteer => "volunteer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoginRole::Admin => "Administrator",
            LoginRole::HealthOfficial => "Health Official",
            LoginRole::Volunteer => "Community Volunteer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoginRole::Admin => "Full system access",
            LoginRole::HealthOfficial => "Monitor and respond to alerts",
            LoginRole::Volunteer => "Field data collection",
        }
    }

    pub fn all() -> Vec<LoginRole> {
        vec![LoginRole::Admin, LoginRole::HealthOfficial, LoginRole::Volunteer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(LoginRole::Admin),
            "health-official" => Some(LoginRole::HealthOfficial),
            "volunteer" => Some(LoginRole::Volunteer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Option<LoginRole>,
    pub username: String,
    /// Collected by the form, never checked
    pub password: String,
    pub language: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_login(self.role, &self.username)
    }

    /// Session opened by a valid request. No credentials are verified.
    pub fn into_session(self) -> Result<Session, ValidationError> {
        self.validate()?;
        let role = self.role.ok_or(ValidationError::MissingRole)?;
        Ok(Session {
            role,
            username: self.username.trim().to_string(),
            language: self.language,
        })
    }
}

/// The dashboard is reachable once a role is chosen and a username typed.
pub fn validate_login(role: Option<LoginRole>, username: &str) -> Result<(), ValidationError> {
    if role.is_none() {
        return Err(ValidationError::MissingRole);
    }
    if username.trim().is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    Ok(())
}

/// In-memory session of the signed-in operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: LoginRole,
    pub username: String,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: Option<LoginRole>, username: &str) -> LoginRequest {
        LoginRequest {
            role,
            username: username.into(),
            password: String::new(),
            language: "as".into(),
        }
    }

    #[test]
    fn test_role_and_username_required() {
        assert_eq!(validate_login(None, "ravi"), Err(ValidationError::MissingRole));
        assert_eq!(
            validate_login(Some(LoginRole::Volunteer), ""),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            validate_login(Some(LoginRole::Volunteer), "   "),
            Err(ValidationError::MissingUsername)
        );
        assert!(validate_login(Some(LoginRole::Admin), "ravi").is_ok());
    }

    #[test]
    fn test_password_is_not_checked() {
        let session = request(Some(LoginRole::HealthOfficial), " priya ")
            .into_session()
            .unwrap();
        assert_eq!(session.username, "priya");
        assert_eq!(session.role, LoginRole::HealthOfficial);
        assert_eq!(session.language, "as");
    }

    #[test]
    fn test_invalid_request_opens_no_session() {
        assert!(request(None, "priya").into_session().is_err());
    }

    #[test]
    fn test_role_codes() {
        for role in LoginRole::all() {
            assert_eq!(LoginRole::from_code(role.code()), Some(role));
        }
        assert_eq!(LoginRole::from_code("root"), None);
        assert_eq!(LoginRole::Volunteer.display_name(), "Community Volunteer");
    }
}
