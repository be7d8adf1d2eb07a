use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use crate::domain::PanelError;
use crate::routes::render;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

#[tracing::instrument(name = "Not found page", skip_all)]
pub async fn not_found() -> Result<(StatusCode, Html<String>), PanelError> {
    Ok((StatusCode::NOT_FOUND, render(NotFoundTemplate)?))
}
