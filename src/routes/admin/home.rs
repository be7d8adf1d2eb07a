use askama::Template;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::domain::PanelError;
use crate::routes::render;
use crate::utils::auth::current_session;

#[derive(Template)]
#[template(path = "admin/home.html")]
pub struct AdminHomeTemplate {
    pub editor_email: String,
}

#[tracing::instrument(name = "Admin home page", skip_all)]
pub async fn admin_home(jar: CookieJar) -> Result<Html<String>, PanelError> {
    let user = current_session(&jar)?;
    render(AdminHomeTemplate {
        editor_email: user.email,
    })
}
