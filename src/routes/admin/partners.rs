use askama::Template;
use axum::extract::{Multipart, Path, Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::app_state::AppState;
use crate::domain::{
    DisplayName, ModalState, NewPartner, Notice, PanelError, Partner,
    PartnerUpdate, ValidationError,
};
use crate::routes::{fetch_partners, render};
use crate::services::query_cache::ResourceKey;
use crate::utils::auth::current_session;
use crate::utils::flash::{push_notice, take_notice};

use super::members::UploadField;
use super::{finish_mutation, PanelQuery};

const PANEL_PATH: &str = "/admin/partners";

#[derive(Template)]
#[template(path = "admin/partners.html")]
pub struct AdminPartnersTemplate {
    pub total_count: u32,
    pub partners: Vec<Partner>,
    pub modal: ModalState,
    pub selected: Option<Partner>,
    pub notice: Option<Notice>,
}

#[tracing::instrument(name = "Admin partners panel", skip_all)]
pub async fn partners_panel(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PanelQuery>,
) -> Result<(CookieJar, Html<String>), PanelError> {
    current_session(&jar)?;

    let (jar, notice) = take_notice(jar);
    let list = fetch_partners(&state).await?;

    let mut modal = ModalState::from_query(query.modal.as_deref(), query.id);
    let selected = modal.selected_id().and_then(|id| list.find(id)).cloned();
    if modal.selected_id().is_some() && selected.is_none() {
        modal = ModalState::Closed;
    }

    let page = render(AdminPartnersTemplate {
        total_count: list.total_count,
        partners: list.partners,
        modal,
        selected,
        notice,
    })?;

    Ok((jar, page))
}

#[tracing::instrument(name = "Add partner", skip_all)]
pub async fn add_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = PartnerFormData::read(multipart).await?;
    let new_partner = match form.into_new_partner() {
        Ok(new_partner) => new_partner,
        Err(e) => {
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((jar, Redirect::to("/admin/partners?modal=add")));
        }
    };

    let result = state.partners.write().await.add(new_partner).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Partners,
        result,
        PANEL_PATH,
        "Partner added successfully!",
        "Failed to add Partner",
    )
    .await)
}

#[tracing::instrument(name = "Update partner", skip_all)]
pub async fn update_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let form = PartnerFormData::read(multipart).await?;
    let update = match form.into_partner_update() {
        Ok(update) => update,
        Err(e) => {
            let jar = push_notice(jar, &Notice::error(e.as_ref().as_str()));
            return Ok((
                jar,
                Redirect::to(&format!("/admin/partners?modal=edit&id={id}")),
            ));
        }
    };

    let result = state.partners.write().await.update(id, update).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Partners,
        result,
        PANEL_PATH,
        "Partner updated successfully!",
        "Failed to update Partner",
    )
    .await)
}

#[tracing::instrument(name = "Delete partner", skip_all)]
pub async fn delete_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), PanelError> {
    current_session(&jar)?;

    let result = state.partners.write().await.delete(id).await;
    Ok(finish_mutation(
        &state,
        jar,
        ResourceKey::Partners,
        result,
        PANEL_PATH,
        "Partner deleted successfully!",
        "Failed to delete Partner",
    )
    .await)
}

#[derive(Debug, Default)]
struct PartnerFormData {
    name: Option<String>,
    website_url: Option<String>,
    logo: Option<UploadField>,
}

impl PartnerFormData {
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
                "websiteUrl" => {
                    data.website_url = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PanelError::UnexpectedError(eyre!(e)))?,
                    )
                }
                "logo" => {
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
                        data.logo = Some(UploadField {
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

    fn website_url(&self) -> Option<String> {
        self.website_url
            .clone()
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
    }

    fn into_new_partner(self) -> Result<NewPartner, ValidationError> {
        let website_url = self.website_url();
        let name = self.name.filter(|n| !n.is_empty());
        let (Some(name), Some(logo)) = (name, self.logo) else {
            return Err(ValidationError::new(
                "Name and Logo are required".to_string(),
            ));
        };

        Ok(NewPartner {
            name: DisplayName::parse(name)?,
            website_url,
            logo: logo.into_image()?,
        })
    }

    fn into_partner_update(self) -> Result<PartnerUpdate, ValidationError> {
        let website_url = self.website_url();
        let Some(name) = self.name.filter(|n| !n.is_empty()) else {
            return Err(ValidationError::new("Name is required".to_string()));
        };

        Ok(PartnerUpdate {
            name: DisplayName::parse(name)?,
            website_url,
            logo: self.logo.map(UploadField::into_image).transpose()?,
        })
    }
}
