use askama::Template;
use axum::response::Html;

use crate::domain::PanelError;
use crate::routes::render;

#[derive(Template)]
#[template(path = "recruitment.html")]
pub struct RecruitmentTemplate;

#[tracing::instrument(name = "Recruitment page", skip_all)]
pub async fn recruitment() -> Result<Html<String>, PanelError> {
    render(RecruitmentTemplate)
}
