use askama::Template;
use axum::extract::{Multipart, Path, Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::app_state::AppState;
use crate::domain::{
    DisplayName, ModalState, NewProject, Notice, PanelError, Project,
    ProjectUpdate, ValidationError,
};
use crate::routes::{fetch_projects, render};
use crate::services::query_cache::ResourceKey;
use crate::utils::auth::current_session;
use crate::utils::flash::{push_notice, take_notice};

use super::members::UploadField;
use super::{finish_mutation, PanelQuery};

const PANEL_PATH: &str = "/admin/projects";

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub total_count: u32,
    pub projects: Vec<Project>,
    pub modal: ModalState,
    pub selected: Option<Project>,
    pub notice: Option<Notice>,
}

#[tracing::instrument(name = "Admin projects panel", skip_all)]
pub async fn projects_panel(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PanelQuery>,
) -> Result<(CookieJar, Html<String>), PanelError> {
    current_session(&jar)?;

    let (jar, notice) = take_notice(jar);
    let list = fetch_projects(&state).await?;

    let mut modal = ModalState::from_query(query.modal.as_deref(), query.id);
    let selected = modal.selected_id().and_then(|id| list.find(id)).cloned();
    if modal.selected_id().is_some() && selected.is_none() {
        modal = ModalState::Closed;
    }

    let page = render(AdminProjectsTemplate {
        total_count: list.total_count,
        projects: list.projects,
        modal,
        selected,
        notice,
    })?;

    Ok((jar, page))
}

#[tracing::instrument(name = "Add project", skip_all)]
pub async fn add_project(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = ProjectFormData::read(multipart).await?;
    let new_project = match form.into_new_project() {
        Ok(new_project) => new_project,
        Err(e) => {
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((jar, Redirect::to("/admin/projects?modal=add")));
        }
    };

    let result = state.projects.write().await.add(new_project).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Projects,
        result,
        PANEL_PATH,
        "Project added successfully!",
        "Failed to add Project",
    )
    .await)
}

#[tracing::instrument(name = "Update project", skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = ProjectFormData::read(multipart).await?;
    let update = match form.into_project_update() {
        Ok(update) => update,
        Err(e) => {
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((
                jar,
                Redirect::to(&format!("/admin/projects?modal=edit&id={id}")),
            ));
        }
    };

    let result = state.projects.write().await.update(id, update).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Projects,
        result,
        PANEL_PATH,
        "Project updated successfully!",
        "Failed to update Project",
    )
    .await)
}

#[tracing::instrument(name = "Delete project", skip_all)]
pub async fn delete_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let result = state.projects.write().await.delete(id).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Projects,
        result,
        PANEL_PATH,
        "Project deleted successfully!",
        "Failed to delete Project",
    )
    .await)
}

#[derive(Debug, Default)]
struct ProjectFormData {
    name: Option<String>,
    description: Option<String>,
    image: Option<UploadField>,
}

impl ProjectFormData {
    async fn read(mut multipart: Multipart) -> Result<Self, PanelError> {
        let mut data = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?
        {
            let field_name = field.name().unwrap_or_default().to_owned();
            match field_name.as_str() {
                "name" => {
                    data.name = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?,
                    )
                }
                "description" => {
                    data.description = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?,
                    )
                }
                "image" => {
                    let file_name =
                        field.file_name().unwrap_or_default().to_owned();
                    let content_type =
                        field.content_type().unwrap_or_default().to_owned();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?
                        .to_vec();
                    if !bytes.is_empty() {
                        data.image = Some(UploadField {
                            file_name,
                            content_type,
                            bytes,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(data)
    }

    fn description(&self) -> Option<String> {
        self.description
            .clone()
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty())
    }

    fn into_new_project(self) -> Result<NewProject, ValidationError> {
        let description = self.description();
        let name = self.name.filter(|n| !n.is_empty());
        let (Some(name), Some(image)) = (name, self.image) else {
            return Err(ValidationError::new(
                "Name and Image are required".to_string(),
            ));
        };

        Ok(NewProject {
            name: DisplayName::parse(name)?,
            description,
            image: image.into_image()?,
        })
    }

    fn into_project_update(self) -> Result<ProjectUpdate, ValidationError> {
        let description = self.description();
        let Some(name) = self.name.filter(|n| !n.is_empty()) else {
            return Err(ValidationError::new("Name is required".to_string()));
        };

        Ok(ProjectUpdate {
            name: DisplayName::parse(name)?,
            description,
            image: self.image.map(UploadField::into_image).transpose()?,
        })
    }
}
