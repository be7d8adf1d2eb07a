use askama::Template;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    serve::Serve,
    Router,
};
use std::error::Error;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Level;

use domain::{AuthError, PanelError};
pub mod routes;
use crate::utils::tracing::*;
use routes::{
    admin::{
        add_member, add_partner, add_project, admin_home, delete_member,
        delete_partner, delete_project, login, login_page, logout,
        members_panel, partners_panel, projects_panel, update_member,
        update_partner, update_project,
    },
    pages::{
        contact_page, home, members, not_found, portfolio, recruitment,
        submit_contact,
    },
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

// Admin uploads are images; anything bigger than this is a mistake.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate;

fn error_page(status: StatusCode) -> Response {
    let body = ErrorTemplate.render().unwrap_or_else(|_| {
        "Something went wrong. Please try again later.".to_string()
    });
    (status, Html(body)).into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::MissingToken | AuthError::InvalidToken => {
                log_error_chain(&self, Level::DEBUG);
                Redirect::to("/admin").into_response()
            }
            AuthError::IncorrectCredentials => {
                log_error_chain(&self, Level::DEBUG);
                error_page(StatusCode::UNAUTHORIZED)
            }
            AuthError::ValidationError(_) => {
                log_error_chain(&self, Level::DEBUG);
                error_page(StatusCode::BAD_REQUEST)
            }
            AuthError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        match &self {
            // The route guard: no valid session, back to the login page
            PanelError::AuthenticationError(_) => {
                log_error_chain(&self, Level::DEBUG);
                Redirect::to("/admin").into_response()
            }
            PanelError::FetchError(_) => {
                log_error_chain(&self, Level::ERROR);
                error_page(StatusCode::BAD_GATEWAY)
            }
            PanelError::ValidationError(_) => {
                log_error_chain(&self, Level::DEBUG);
                error_page(StatusCode::BAD_REQUEST)
            }
            PanelError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

pub(crate) fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let router = Router::new()
            .route("/", get(home))
            .route("/portfolio", get(portfolio))
            .route("/recruitment", get(recruitment))
            .route("/members", get(members))
            .route("/contact", get(contact_page).post(submit_contact))
            .route("/admin", get(login_page))
            .route("/admin/login", post(login))
            .route("/admin/logout", post(logout))
            .route("/admin/home", get(admin_home))
            .route("/admin/members", get(members_panel))
            .route("/admin/members/add", post(add_member))
            .route("/admin/members/update/:id", post(update_member))
            .route("/admin/members/delete/:id", post(delete_member))
            .route("/admin/partners", get(partners_panel))
            .route("/admin/partners/add", post(add_partner))
            .route("/admin/partners/update/:id", post(update_partner))
            .route("/admin/partners/delete/:id", post(delete_partner))
            .route("/admin/projects", get(projects_panel))
            .route("/admin/projects/add", post(add_project))
            .route("/admin/projects/update/:id", post(update_project))
            .route("/admin/projects/delete/:id", post(delete_project))
            .nest_service("/assets", ServeDir::new("assets"))
            .fallback(not_found)
            .with_state(app_state)
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

#[allow(dead_code)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
