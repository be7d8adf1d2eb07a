use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::{ContactForm, EmailClient};

// Client for the hosted template-email service. The template itself lives
// on the provider's side; we only supply the ids and the four params.
pub struct EmailJsClient {
    http_client: reqwest::Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: Secret<String>,
}

impl EmailJsClient {
    pub fn new(
        http_client: reqwest::Client,
        base_url: String,
        service_id: String,
        template_id: String,
        public_key: Secret<String>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            service_id,
            template_id,
            public_key,
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

#[async_trait::async_trait]
impl EmailClient for EmailJsClient {
    #[tracing::instrument(name = "Sending contact email", skip_all)]
    async fn send_email(&self, message: &ContactForm) -> Result<()> {
        let request = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: message,
        };

        let response = self
            .http_client
            .post(format!("{}/api/v1.0/email/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(eyre!(
                "email service returned status {}",
                response.status()
            ));
        }

        Ok(())
    }
}
