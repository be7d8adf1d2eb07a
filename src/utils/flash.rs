use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::domain::Notice;

use super::constants::NOTICE_COOKIE_NAME;

// One-shot notice carried across the POST -> redirect -> GET hop.
// Base64 keeps the JSON payload inside the cookie-octet charset.
pub fn push_notice(jar: CookieJar, notice: &Notice) -> CookieJar {
    let json = match serde_json::to_vec(notice) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("failed to serialize notice: {e}");
            return jar;
        }
    };

    let cookie = Cookie::build((NOTICE_COOKIE_NAME, URL_SAFE_NO_PAD.encode(json)))
        .path("/")
        .http_only(true)
        .build();

    jar.add(cookie)
}

// Read and clear the pending notice, if any. Undecodable cookies are
// dropped silently: a stale or tampered notice is not worth failing a render.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE_NAME) else {
        return (jar, None);
    };

    let notice = URL_SAFE_NO_PAD
        .decode(cookie.value())
        .ok()
        .and_then(|json| serde_json::from_slice(&json).ok());

    // Removal must match the path the cookie was set with
    let jar = jar.remove(Cookie::build(NOTICE_COOKIE_NAME).path("/").build());

    (jar, notice)
}
