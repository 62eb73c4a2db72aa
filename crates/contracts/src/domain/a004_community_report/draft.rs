use serde::{Deserialize, Serialize};

use crate::enums::Severity;
use crate::shared::error::ValidationError;

/// Quick report form on the community page. Nothing is stored on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub location: String,
    pub symptoms: String,
    pub severity: Option<Severity>,
}

impl ReportDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location.trim().is_empty() {
            return Err(ValidationError::Required { field: "Location" });
        }
        if self.symptoms.trim().is_empty() {
            return Err(ValidationError::Required { field: "Symptoms" });
        }
        if self.severity.is_none() {
            return Err(ValidationError::Required { field: "Severity" });
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let mut draft = ReportDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::Required { field: "Location" }));

        draft.location = "Majuli Ward 3".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required { field: "Symptoms" }));

        draft.symptoms = "   ".into();
        assert!(!draft.is_complete());

        draft.symptoms = "Diarrhea".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required { field: "Severity" }));

        draft.severity = Some(Severity::High);
        assert!(draft.is_complete());
    }
}
