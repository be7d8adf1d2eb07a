use super::ValidationError;
use serde::{Deserialize, Serialize};

// Display name for a member, partner or project as entered in an admin form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        match name.chars().count() {
            x if x < 1 => {
                Err(ValidationError::new("Name cannot be empty".to_string()))
            }
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name)),
        }
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
