use thiserror::Error;

/// Rejected user input on a settings or login form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },

    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field}: {value} is outside {lower}..={upper}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },

    #[error("{field}: value must be positive")]
    NotPositive { field: &'static str },

    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("select a role to continue")]
    MissingRole,

    #[error("enter a username to continue")]
    MissingUsername,
}

impl ValidationError {
    /// Form field the error belongs to, for inline messages
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { field, .. }
            | ValidationError::InvertedRange { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::Required { field } => field,
            ValidationError::MissingRole => "role",
            ValidationError::MissingUsername => "username",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parse a numeric form field. Surrounding whitespace is ignored.
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("ph_min", " 6.5 "), Ok(6.5));
        assert_eq!(parse_number("tds_max", "500"), Ok(500.0));
        assert!(matches!(
            parse_number("tds_max", "abc"),
            Err(ValidationError::NotANumber { field: "tds_max", .. })
        ));
        assert!(parse_number("tds_max", "").is_err());
        assert!(parse_number("tds_max", "NaN").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvertedRange {
            field: "pH",
            min: 9.0,
            max: 6.0,
        };
        assert_eq!(err.to_string(), "pH: minimum 9 is greater than maximum 6");
        assert_eq!(err.field(), "pH");
        assert_eq!(ValidationError::MissingRole.field(), "role");
    }
}
