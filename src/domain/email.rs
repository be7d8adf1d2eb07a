use secrecy::{ExposeSecret, Secret};

use std::hash::Hash;

use super::ValidationError;

#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

impl Email {
    pub fn parse(s: Secret<String>) -> Result<Self, ValidationError> {
        if !validator::validate_email(s.expose_secret()) {
            return Err(ValidationError::new(
                "Invalid email address".to_string(),
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
