use color_eyre::eyre::Result;

use super::ContactForm;

// Transactional email service. The message's four fields are the template
// params of a template configured on the provider's side.
#[async_trait::async_trait]
pub trait EmailClient {
    async fn send_email(&self, message: &ContactForm) -> Result<()>;
}
