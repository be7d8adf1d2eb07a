use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::domain::{Member, PanelError};
use crate::routes::{fetch_roster, render};

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersTemplate {
    pub total_count: u32,
    pub exec: Vec<Member>,
    pub non_exec: Vec<Member>,
}

#[tracing::instrument(name = "Public members page", skip_all)]
pub async fn members(
    State(state): State<AppState>,
) -> Result<Html<String>, PanelError> {
    let roster = fetch_roster(&state).await?;

    render(MembersTemplate {
        total_count: roster.total_count,
        exec: roster.exec_ordered(),
        non_exec: roster.non_exec_ordered(),
    })
}
