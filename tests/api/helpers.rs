use std::sync::Arc;

use portico::app_state::AppState;
use portico::domain::Email;
use portico::services::emailjs_client::EmailJsClient;
use portico::services::gateways::{
    HttpAuthGateway, HttpMemberGateway, HttpPartnerGateway,
    HttpProjectGateway,
};
use portico::services::query_cache::QueryCache;
use portico::utils::auth::generate_session_token;
use portico::utils::constants::test;
use portico::Application;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use secrecy::{ExposeSecret, Secret};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub backend_server: MockServer,
    pub auth_server: MockServer,
    pub email_server: MockServer,
    pub cookie_jar: Arc<Jar>,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let backend_server = MockServer::start().await;
        let auth_server = MockServer::start().await;
        let email_server = MockServer::start().await;

        let backend_http_client = reqwest::Client::builder()
            .timeout(test::backend_client::TIMEOUT)
            .build()
            .expect("Failed to build backend HTTP client");
        let email_http_client = reqwest::Client::builder()
            .timeout(test::email_client::TIMEOUT)
            .build()
            .expect("Failed to build email HTTP client");

        let members = Arc::new(RwLock::new(HttpMemberGateway::new(
            backend_http_client.clone(),
            backend_server.uri(),
        )));
        let partners = Arc::new(RwLock::new(HttpPartnerGateway::new(
            backend_http_client.clone(),
            backend_server.uri(),
        )));
        let projects = Arc::new(RwLock::new(HttpProjectGateway::new(
            backend_http_client.clone(),
            backend_server.uri(),
        )));
        let auth = Arc::new(HttpAuthGateway::new(
            backend_http_client,
            auth_server.uri(),
        ));
        let email_client = Arc::new(EmailJsClient::new(
            email_http_client,
            email_server.uri(),
            "service_test".to_owned(),
            "template_test".to_owned(),
            Secret::new("public_test".to_owned()),
        ));

        let app_state = AppState::new(
            members,
            partners,
            projects,
            auth,
            email_client,
            QueryCache::new(),
        );

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            backend_server,
            auth_server,
            email_server,
            cookie_jar,
            http_client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

#[async_trait::async_trait]
impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub const EDITOR_EMAIL: &str = "editor@example.com";

// Runs the full login flow against the mock auth provider, leaving the
// session cookie in the app's jar.
pub async fn sign_in(app: &TestApp) {
    let email =
        Email::parse(Secret::new(EDITOR_EMAIL.to_owned())).unwrap();
    let token = generate_session_token(&email).unwrap();

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "token": token.expose_secret() }),
        ))
        .mount(&app.auth_server)
        .await;

    let response = app
        .post_form("/admin/login", &[("email", EDITOR_EMAIL), ("password", "hunter2")])
        .await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin/home");
}

pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("response should carry a location header")
        .to_str()
        .unwrap()
}

pub async fn body(response: reqwest::Response) -> String {
    response.text().await.expect("Failed to read response body")
}

pub fn sample_roster() -> serde_json::Value {
    serde_json::json!({
        "totalCount": 2,
        "exec": [{ "id": 1, "name": "A", "relativeOrder": 1 }],
        "nonExec": [{ "id": 2, "name": "B" }]
    })
}

pub async fn mock_members(app: &TestApp, roster: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster))
        .mount(&app.backend_server)
        .await;
}

pub async fn mock_partners(app: &TestApp, list: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list))
        .mount(&app.backend_server)
        .await;
}

pub async fn mock_projects(app: &TestApp, list: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list))
        .mount(&app.backend_server)
        .await;
}

pub fn png_part() -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("upload.png")
        .mime_str("image/png")
        .unwrap()
}
