use std::sync::Arc;

use tokio::sync::RwLock;

use portico::app_state::AppState;
use portico::services::emailjs_client::EmailJsClient;
use portico::services::gateways::{
    HttpAuthGateway, HttpMemberGateway, HttpPartnerGateway,
    HttpProjectGateway,
};
use portico::services::query_cache::QueryCache;
use portico::utils::constants::{
    prod, AUTH_BASE_URL, BACKEND_BASE_URL, EMAIL_BASE_URL, EMAIL_PUBLIC_KEY,
    EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID,
};
use portico::utils::tracing::init_tracing;
use portico::Application;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let backend_http_client = reqwest::Client::builder()
        .timeout(prod::backend_client::TIMEOUT)
        .build()
        .expect("Failed to build backend HTTP client");

    let email_http_client = reqwest::Client::builder()
        .timeout(prod::email_client::TIMEOUT)
        .build()
        .expect("Failed to build email HTTP client");

    let members = Arc::new(RwLock::new(HttpMemberGateway::new(
        backend_http_client.clone(),
        BACKEND_BASE_URL.clone(),
    )));
    let partners = Arc::new(RwLock::new(HttpPartnerGateway::new(
        backend_http_client.clone(),
        BACKEND_BASE_URL.clone(),
    )));
    let projects = Arc::new(RwLock::new(HttpProjectGateway::new(
        backend_http_client.clone(),
        BACKEND_BASE_URL.clone(),
    )));
    let auth = Arc::new(HttpAuthGateway::new(
        backend_http_client,
        AUTH_BASE_URL.clone(),
    ));
    let email_client = Arc::new(EmailJsClient::new(
        email_http_client,
        EMAIL_BASE_URL.clone(),
        EMAIL_SERVICE_ID.clone(),
        EMAIL_TEMPLATE_ID.clone(),
        EMAIL_PUBLIC_KEY.clone(),
    ));

    let app_state = AppState::new(
        members,
        partners,
        projects,
        auth,
        email_client,
        QueryCache::new(),
    );

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
