use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use color_eyre::eyre::{eyre, Context, ContextCompat, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::{AuthError, Email, SessionUser};

use super::constants::{AUTH_TOKEN_SECRET, SESSION_COOKIE_NAME};

// Create cookie holding the provider-issued session token
#[tracing::instrument(name = "Creating session cookie", skip_all)]
pub fn create_session_cookie(token: Secret<String>) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.expose_secret().to_owned()))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax) // send cookie with "same-site" requests, and with "cross-site" top-level navigations.
        .build()
}

// How long a session token minted by the in-memory provider is valid for.
// Tokens from the real provider carry their own expiry.
pub const TOKEN_TTL_SECONDS: i64 = 600; // 10 minutes

// Mint a session token the way the auth provider does. Used by the
// in-memory provider double; the HTTP provider returns its own tokens.
#[tracing::instrument(name = "Generating session token", skip_all)]
pub fn generate_session_token(email: &Email) -> Result<Secret<String>> {
    let delta = chrono::Duration::try_seconds(TOKEN_TTL_SECONDS)
        .wrap_err("Failed to create 10 minute time delta")?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(eyre!("failed to add to current time"))?
        .timestamp();

    let exp: usize = exp.try_into().wrap_err(format!(
        "failed to cast exp time to usize. exp time: {}",
        exp
    ))?;

    let sub = email.as_ref().expose_secret().to_owned();

    let claims = Claims { sub, exp };

    let token_string = encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(
            AUTH_TOKEN_SECRET.expose_secret().as_bytes(),
        ),
    )
    .wrap_err("failed to create token")?;

    Ok(Secret::new(token_string))
}

// Observe the session carried by the token: decode its claims with the
// provider's shared signing secret. Expired or tampered tokens fail here.
#[tracing::instrument(name = "Validating session token", skip_all)]
pub fn validate_session_token(token: &Secret<String>) -> Result<Claims> {
    decode::<Claims>(
        token.expose_secret(),
        &DecodingKey::from_secret(
            AUTH_TOKEN_SECRET.expose_secret().as_bytes(),
        ),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .wrap_err("failed to decode token")
}

// Route guard: resolve the current session from the cookie jar.
// Guarded handlers call this first and bubble the error into a redirect.
#[tracing::instrument(name = "Resolving current session", skip_all)]
pub fn current_session(jar: &CookieJar) -> Result<SessionUser, AuthError> {
    let cookie = jar.get(SESSION_COOKIE_NAME).ok_or(AuthError::MissingToken)?;

    let token = Secret::new(cookie.value().to_string());

    let claims = validate_session_token(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    Ok(SessionUser { email: claims.sub })
}

// The removal cookie must carry the same path the session cookie was set
// with, or the browser keeps the original.
pub fn remove_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/").build())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
