use color_eyre::eyre::eyre;
use reqwest::multipart::Form;

use crate::domain::{
    GatewayError, NewPartner, PartnerGateway, PartnerList, PartnerUpdate,
};

use super::http_members::{check_status, image_part};

pub struct HttpPartnerGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpPartnerGateway {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl PartnerGateway for HttpPartnerGateway {
    #[tracing::instrument(name = "Fetching partner list", skip_all)]
    async fn list(&self) -> Result<PartnerList, GatewayError> {
        let response = self
            .http_client
            .get(self.url("/partners"))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)?;

        let partners: PartnerList = response
            .json()
            .await
            .map_err(|e| GatewayError::ContractViolation(e.to_string()))?;

        partners
            .validate_total_count()
            .map_err(GatewayError::ContractViolation)?;

        Ok(partners)
    }

    #[tracing::instrument(name = "Adding partner", skip_all)]
    async fn add(
        &mut self,
        new_partner: NewPartner,
    ) -> Result<(), GatewayError> {
        let form = Form::new()
            .text("name", new_partner.name.as_ref().to_owned())
            .text("websiteUrl", new_partner.website_url.unwrap_or_default())
            .part("logo", image_part(new_partner.logo)?);

        let response = self
            .http_client
            .post(self.url("/partners/add"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)
    }

    #[tracing::instrument(name = "Updating partner", skip_all)]
    async fn update(
        &mut self,
        id: i64,
        update: PartnerUpdate,
    ) -> Result<(), GatewayError> {
        let mut form = Form::new()
            .text("name", update.name.as_ref().to_owned())
            .text("websiteUrl", update.website_url.unwrap_or_default());

        if let Some(logo) = update.logo {
            form = form.part("logo", image_part(logo)?);
        }

        let response = self
            .http_client
            .put(self.url(&format!("/partners/update/{id}")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }

    #[tracing::instrument(name = "Deleting partner", skip_all)]
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        let response = self
            .http_client
            .delete(self.url(&format!("/partners/delete/{id}")))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }
}
