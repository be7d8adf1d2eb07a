use askama::Template;
use axum::response::Html;

use crate::domain::PanelError;
use crate::routes::render;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[tracing::instrument(name = "Home page", skip_all)]
pub async fn home() -> Result<Html<String>, PanelError> {
    render(HomeTemplate)
}
