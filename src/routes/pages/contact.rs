use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::app_state::AppState;
use crate::domain::{ContactForm, ContactFormErrors, Notice, PanelError};
use crate::routes::render;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub values: ContactForm,
    pub errors: ContactFormErrors,
    pub notice: Option<Notice>,
}

#[tracing::instrument(name = "Contact page", skip_all)]
pub async fn contact_page() -> Result<Html<String>, PanelError> {
    render(ContactTemplate {
        values: ContactForm::default(),
        errors: ContactFormErrors::default(),
        notice: None,
    })
}

#[tracing::instrument(name = "Contact form submission", skip_all)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, PanelError> {
    // Field errors stop the submission before it can reach the network
    if let Err(errors) = form.validate_fields() {
        return render(ContactTemplate {
            values: form,
            errors,
            notice: None,
        });
    }

    match state.email_client.send_email(&form).await {
        Ok(()) => render(ContactTemplate {
            values: ContactForm::default(),
            errors: ContactFormErrors::default(),
            notice: Some(Notice::success("Email sent successfully!")),
        }),
        Err(e) => {
            tracing::error!("contact email send failed: {e:?}");
            render(ContactTemplate {
                values: form,
                errors: ContactFormErrors::default(),
                notice: Some(Notice::error(
                    "Failed to send email. Please try again.",
                )),
            })
        }
    }
}
