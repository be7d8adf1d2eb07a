use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use secrecy::Secret;

use crate::app_state::AppState;
use crate::domain::AuthError;
use crate::utils::auth::remove_session_cookie;
use crate::utils::constants::SESSION_COOKIE_NAME;

#[tracing::instrument(name = "Admin logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AuthError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        let token = Secret::new(cookie.value().to_string());
        // The local session ends either way; a provider failure is only logged
        if let Err(e) = state.auth.sign_out(&token).await {
            tracing::warn!("auth provider sign-out failed: {e:?}");
        }
    }

    let jar = remove_session_cookie(jar);
    Ok((jar, Redirect::to("/admin")))
}
