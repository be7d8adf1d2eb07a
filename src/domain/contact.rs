use serde::{Deserialize, Serialize};
use validator::Validate;

// Contact form values double as the email template params: the four field
// names match the template placeholders the email service expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

impl ContactForm {
    // Field-level validation; a failure here never reaches the network.
    pub fn validate_fields(&self) -> Result<(), ContactFormErrors> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_message = |field: &str| -> Option<String> {
            errors.field_errors().get(field).and_then(|errs| {
                errs.first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
            })
        };

        Err(ContactFormErrors {
            name: field_message("name"),
            email: field_message("email"),
            subject: field_message("subject"),
            message: field_message("message"),
        })
    }
}
