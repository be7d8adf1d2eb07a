use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::domain::{PanelError, Partner, Project};
use crate::routes::{fetch_partners, fetch_projects, render};

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub projects: Vec<Project>,
    pub partners: Vec<Partner>,
}

#[tracing::instrument(name = "Portfolio page", skip_all)]
pub async fn portfolio(
    State(state): State<AppState>,
) -> Result<Html<String>, PanelError> {
    let projects = fetch_projects(&state).await?;
    let partners = fetch_partners(&state).await?;

    render(PortfolioTemplate {
        projects: projects.projects,
        partners: partners.partners,
    })
}
