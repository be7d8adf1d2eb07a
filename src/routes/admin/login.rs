use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{extract::State, Form};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::domain::{AuthError, AuthGatewayError, Email};
use crate::utils::auth::{create_session_cookie, current_session};

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[tracing::instrument(name = "Admin login page", skip_all)]
pub async fn login_page(jar: CookieJar) -> Result<Response, AuthError> {
    // Already signed in: straight through to the portal
    if current_session(&jar).is_ok() {
        return Ok(Redirect::to("/admin/home").into_response());
    }

    let page = LoginTemplate { error: None }
        .render()
        .map_err(|e| AuthError::UnexpectedError(eyre!(e)))?;
    Ok(Html(page).into_response())
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Admin login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> Result<Response, AuthError> {
    let email = match Email::parse(Secret::new(request.email)) {
        Ok(email) => email,
        // A malformed email can never be a valid account
        Err(_) => return login_rejected(),
    };

    match state.auth.sign_in(&email, &request.password).await {
        Ok(token) => {
            let jar = jar.add(create_session_cookie(token));
            Ok((jar, Redirect::to("/admin/home")).into_response())
        }
        Err(AuthGatewayError::IncorrectCredentials) => login_rejected(),
        Err(AuthGatewayError::UnexpectedError(e)) => {
            Err(AuthError::UnexpectedError(e))
        }
    }
}

fn login_rejected() -> Result<Response, AuthError> {
    let page = LoginTemplate {
        error: Some("Incorrect email or password".to_string()),
    }
    .render()
    .map_err(|e| AuthError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::UNAUTHORIZED, Html(page)).into_response())
}
