use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{GatewayError, Notice};
use crate::log_error_chain;
use crate::services::query_cache::ResourceKey;
use crate::utils::flash::push_notice;

mod home;
mod login;
mod logout;
mod members;
mod partners;
mod projects;

pub use home::*;
pub use login::*;
pub use logout::*;
pub use members::*;
pub use partners::*;
pub use projects::*;

// Shared tail of every panel mutation: the cache is only invalidated once
// the mutation itself has completed, so the next read observes the
// post-mutation state. Failures leave the cache alone and flash a notice
// that stays up until dismissed.
pub(super) async fn finish_mutation(
    state: &AppState,
    jar: CookieJar,
    key: ResourceKey,
    result: Result<(), GatewayError>,
    panel_path: &'static str,
    success_message: &'static str,
    failure_message: &'static str,
) -> (CookieJar, Redirect) {
    match result {
        Ok(()) => {
            state.cache.invalidate(key).await;
            let jar = push_notice(jar, &Notice::success(success_message));
            (jar, Redirect::to(panel_path))
        }
        Err(e) => {
            log_error_chain(&e, tracing::Level::ERROR);
            let jar = push_notice(jar, &Notice::error(failure_message));
            (jar, Redirect::to(panel_path))
        }
    }
}
