use askama::Template;
use axum::extract::{Multipart, Path, Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::domain::{
    DisplayName, ExecRole, ImageUpload, Member, MemberUpdate, ModalState,
    NewMember, Notice, PanelError, ValidationError,
};
use crate::routes::{fetch_roster, render};
use crate::services::query_cache::ResourceKey;
use crate::utils::auth::current_session;
use crate::utils::flash::{push_notice, take_notice};

use super::finish_mutation;

const PANEL_PATH: &str = "/admin/members";

#[derive(Template)]
#[template(path = "admin/members.html")]
pub struct AdminMembersTemplate {
    pub total_count: u32,
    pub exec: Vec<Member>,
    pub non_exec: Vec<Member>,
    pub modal: ModalState,
    pub selected: Option<Member>,
    pub notice: Option<Notice>,
}

#[derive(Deserialize)]
pub struct PanelQuery {
    pub modal: Option<String>,
    pub id: Option<i64>,
}

#[tracing::instrument(name = "Admin members panel", skip_all)]
pub async fn members_panel(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PanelQuery>,
) -> Result<(CookieJar, Html<String>), PanelError> {
    current_session(&jar)?;

    let (jar, notice) = take_notice(jar);
    let roster = fetch_roster(&state).await?;

    let mut modal = ModalState::from_query(query.modal.as_deref(), query.id);
    let selected =
        modal.selected_id().and_then(|id| roster.find(id)).cloned();
    // A dialog whose target has vanished closes itself
    if modal.selected_id().is_some() && selected.is_none() {
        modal = ModalState::Closed;
    }

    let page = render(AdminMembersTemplate {
        total_count: roster.total_count,
        exec: roster.exec_ordered(),
        non_exec: roster.non_exec_ordered(),
        modal,
        selected,
        notice,
    })?;

    Ok((jar, page))
}

#[tracing::instrument(name = "Add member", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = MemberFormData::read(multipart).await?;
    let new_member = match form.into_new_member() {
        Ok(new_member) => new_member,
        Err(e) => {
            // Rejected locally: the backend never sees this submission
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((jar, Redirect::to("/admin/members?modal=add")));
        }
    };

    let result = state.members.write().await.add(new_member).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Members,
        result,
        PANEL_PATH,
        "Member added successfully!",
        "Failed to add Member",
    )
    .await)
}

#[tracing::instrument(name = "Update member", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = MemberFormData::read(multipart).await?;
    let update = match form.into_member_update() {
        Ok(update) => update,
        Err(e) => {
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((
                jar,
                Redirect::to(&format!("/admin/members?modal=edit&id={id}")),
            ));
        }
    };

    let result = state.members.write().await.update(id, update).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Members,
        result,
        PANEL_PATH,
        "Member updated successfully!",
        "Failed to update Member",
    )
    .await)
}

#[tracing::instrument(name = "Delete member", skip_all)]
pub async fn delete_member(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let result = state.members.write().await.delete(id).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Members,
        result,
        PANEL_PATH,
        "Member deleted successfully!",
        "Failed to delete Member",
    )
    .await)
}

#[derive(Debug, Default)]
pub(super) struct UploadField {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadField {
    pub(super) fn into_image(self) -> Result<ImageUpload, ValidationError> {
        ImageUpload::parse(self.file_name, self.content_type, self.bytes)
    }
}

#[derive(Debug, Default)]
struct MemberFormData {
    name: Option<String>,
    exec_role: Option<String>,
    headshot: Option<UploadField>,
}

impl MemberFormData {
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
                "execRole" => {
                    data.exec_role = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?,
                    )
                }
                "headshot" => {
                    let file_name =
                        field.file_name().unwrap_or_default().to_owned();
                    let content_type =
                        field.content_type().unwrap_or_default().to_owned();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?
                        .to_vec();
                    // An empty part means no file was chosen
                    if !bytes.is_empty() {
                        data.headshot = Some(UploadField {
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

    fn into_new_member(self) -> Result<NewMember, ValidationError> {
        let name = self.name.filter(|n| !n.is_empty());
        let (Some(name), Some(headshot)) = (name, self.headshot) else {
            return Err(ValidationError::new(
                "Name and Headshot are required".to_string(),
            ));
        };

        Ok(NewMember {
            name: DisplayName::parse(name)?,
            exec_role: ExecRole::parse_optional(self.exec_role)?,
            headshot: headshot.into_image()?,
        })
    }

    fn into_member_update(self) -> Result<MemberUpdate, ValidationError> {
        let Some(name) = self.name.filter(|n| !n.is_empty()) else {
            return Err(ValidationError::new("Name is required".to_string()));
        };

        Ok(MemberUpdate {
            name: DisplayName::parse(name)?,
            exec_role: ExecRole::parse_optional(self.exec_role)?,
            headshot: self.headshot.map(UploadField::into_image).transpose()?,
        })
    }
}
