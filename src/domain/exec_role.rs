use super::ValidationError;
use serde::{Deserialize, Serialize};

// Executive role title, e.g. "President". Absence of a role is modelled as
// Option<ExecRole> at the call site; an empty form field means "no role".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecRole(String);

impl ExecRole {
    pub fn parse(role: String) -> Result<Self, ValidationError> {
        match role.chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Exec role cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max exec role length is 255 characters".to_string(),
            )),
            _ => Ok(Self(role)),
        }
    }

    // Empty or whitespace-only form input collapses to None.
    pub fn parse_optional(
        role: Option<String>,
    ) -> Result<Option<Self>, ValidationError> {
        match role.map(|r| r.trim().to_owned()).filter(|r| !r.is_empty()) {
            Some(role) => Ok(Some(Self::parse(role)?)),
            None => Ok(None),
        }
    }
}

impl AsRef<str> for ExecRole {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
