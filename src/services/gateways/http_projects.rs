use color_eyre::eyre::eyre;
use reqwest::multipart::Form;

use crate::domain::{
    GatewayError, NewProject, ProjectGateway, ProjectList, ProjectUpdate,
};

use super::http_members::{check_status, image_part};

pub struct HttpProjectGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpProjectGateway {
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
impl ProjectGateway for HttpProjectGateway {
    #[tracing::instrument(name = "Fetching project list", skip_all)]
    async fn list(&self) -> Result<ProjectList, GatewayError> {
        let response = self
            .http_client
            .get(self.url("/projects"))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)?;

        let projects: ProjectList = response
            .json()
            .await
            .map_err(|e| GatewayError::ContractViolation(e.to_string()))?;

        projects
            .validate_total_count()
            .map_err(GatewayError::ContractViolation)?;

        Ok(projects)
    }

    #[tracing::instrument(name = "Adding project", skip_all)]
    async fn add(
        &mut self,
        new_project: NewProject,
    ) -> Result<(), GatewayError> {
        let form = Form::new()
            .text("name", new_project.name.as_ref().to_owned())
            .text("description", new_project.description.unwrap_or_default())
            .part("image", image_part(new_project.image)?);

        let response = self
            .http_client
            .post(self.url("/projects/add"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), None)
    }

    #[tracing::instrument(name = "Updating project", skip_all)]
    async fn update(
        &mut self,
        id: i64,
        update: ProjectUpdate,
    ) -> Result<(), GatewayError> {
        let mut form = Form::new()
            .text("name", update.name.as_ref().to_owned())
            .text("description", update.description.unwrap_or_default());

        if let Some(image) = update.image {
            form = form.part("image", image_part(image)?);
        }

        let response = self
            .http_client
            .put(self.url(&format!("/projects/update/{id}")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }

    #[tracing::instrument(name = "Deleting project", skip_all)]
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        let response = self
            .http_client
            .delete(self.url(&format!("/projects/delete/{id}")))
            .send()
            .await
            .map_err(|e| GatewayError::UnexpectedError(eyre!(e)))?;

        check_status(response.status(), Some(id))
    }
}
