use askama::Template;
use axum::response::Html;
use color_eyre::eyre::eyre;

use crate::app_state::AppState;
use crate::domain::{MemberRoster, PanelError, PartnerList, ProjectList};
use crate::services::query_cache::ResourceKey;

pub mod admin;
pub mod pages;

pub(crate) fn render<T: Template>(
    template: T,
) -> Result<Html<String>, PanelError> {
    template
        .render()
        .map(Html)
        .map_err(|e| PanelError::UnexpectedError(eyre!(e)))
}

// Cached reads. Each panel goes through its resource key; a mutation
// invalidates the key and the next call lands on the backend again.

pub(crate) async fn fetch_roster(
    state: &AppState,
) -> Result<MemberRoster, PanelError> {
    let members = state.members.clone();
    state
        .cache
        .fetch(ResourceKey::Members, move || async move {
            members.read().await.list().await
        })
        .await
        .map(|roster| (*roster).clone())
        .map_err(|e| {
            PanelError::FetchError(eyre!("failed to load member roster: {e}"))
        })
}

pub(crate) async fn fetch_partners(
    state: &AppState,
) -> Result<PartnerList, PanelError> {
    let partners = state.partners.clone();
    state
        .cache
        .fetch(ResourceKey::Partners, move || async move {
            partners.read().await.list().await
        })
        .await
        .map(|list| (*list).clone())
        .map_err(|e| {
            PanelError::FetchError(eyre!("failed to load partner list: {e}"))
        })
}

pub(crate) async fn fetch_projects(
    state: &AppState,
) -> Result<ProjectList, PanelError> {
    let projects = state.projects.clone();
    state
        .cache
        .fetch(ResourceKey::Projects, move || async move {
            projects.read().await.list().await
        })
        .await
        .map(|list| (*list).clone())
        .map_err(|e| {
            PanelError::FetchError(eyre!("failed to load project list: {e}"))
        })
}
