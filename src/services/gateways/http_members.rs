use color_eyre::eyre::eyre;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::domain::{
    GatewayError, ImageUpload, MemberGateway, MemberRoster, MemberUpdate,
    NewMember,
};

pub struct HttpMemberGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpMemberGateway {
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

pub(super) fn image_part(
    upload: ImageUpload,
) -> Result<Part, GatewayError> {
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)
        .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))
}

pub(super) fn check_status(
    status: StatusCode,
    id: Option<i64>,
) -> Result<(), GatewayError> {
    if status.is_success() {
        return Ok(());
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(GatewayError::IdNotFound(id)),
        _ => Err(GatewayError::RequestFailed(status.as_u16())),
    }
}

#[async_trait::async_trait]
impl MemberGateway for HttpMemberGateway {
    #[tracing::instrument(name = "Fetching member roster", skip_all)]
    async fn list(&self) -> Result<MemberRoster, GatewayError> {
        let response = self
            .http_client
            .get(self.url("/members"))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)?;

        let roster: MemberRoster = response
            .json()
            .await
            .map_err(|e| GatewayError::ContractViolation(e.to_string()))?;

        roster
            .validate_total_count()
            .map_err(GatewayError::ContractViolation)?;

        Ok(roster)
    }

    #[tracing::instrument(name = "Adding member", skip_all)]
    async fn add(&mut self, new_member: NewMember) -> Result<(), GatewayError> {
        let exec_role = new_member
            .exec_role
            .map(|r| r.as_ref().to_owned())
            .unwrap_or_default();

        let form = Form::new()
            .text("name", new_member.name.as_ref().to_owned())
            .text("execRole", exec_role)
            .part("headshot", image_part(new_member.headshot)?);

        let response = self
            .http_client
            .post(self.url("/members/add"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)
    }

    #[tracing::instrument(name = "Updating member", skip_all)]
    async fn update(
        &mut self,
        id: i64,
        update: MemberUpdate,
    ) -> Result<(), GatewayError> {
        let exec_role = update
            .exec_role
            .map(|r| r.as_ref().to_owned())
            .unwrap_or_default();

        let mut form = Form::new()
            .text("name", update.name.as_ref().to_owned())
            .text("execRole", exec_role);

        // No new file chosen keeps the stored headshot
        if let Some(headshot) = update.headshot {
            form = form.part("headshot", image_part(headshot)?);
        }

        let response = self
            .http_client
            .put(self.url(&format!("/members/update/{id}")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }

    #[tracing::instrument(name = "Deleting member", skip_all)]
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        let response = self
            .http_client
            .delete(self.url(&format!("/members/delete/{id}")))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }
}
