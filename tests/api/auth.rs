use test_context::test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{location, sign_in, TestApp, EDITOR_EMAIL};

#[test_context(TestApp)]
#[tokio::test]
async fn guarded_paths_redirect_unauthenticated_visitors(app: &mut TestApp) {
    let guarded = [
        "/admin/home",
        "/admin/members",
        "/admin/partners",
        "/admin/projects",
    ];

    for guarded_path in guarded {
        let response = app.get(guarded_path).await;
        assert_eq!(
            response.status().as_u16(),
            303,
            "expected a redirect for {guarded_path}"
        );
        assert_eq!(location(&response), "/admin");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn login_page_renders_for_visitors(app: &mut TestApp) {
    let response = app.get("/admin").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = crate::helpers::body(response).await;
    assert!(body.contains("Sign in"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn successful_login_opens_the_portal(app: &mut TestApp) {
    sign_in(app).await;

    let response = app.get("/admin/home").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = crate::helpers::body(response).await;
    assert!(body.contains(EDITOR_EMAIL));
}

#[test_context(TestApp)]
#[tokio::test]
async fn login_page_redirects_signed_in_editors(app: &mut TestApp) {
    sign_in(app).await;

    let response = app.get("/admin").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin/home");
}

#[test_context(TestApp)]
#[tokio::test]
async fn rejected_credentials_rerender_the_login_form(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.auth_server)
        .await;

    let response = app
        .post_form(
            "/admin/login",
            &[("email", EDITOR_EMAIL), ("password", "wrong")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = crate::helpers::body(response).await;
    assert!(body.contains("Incorrect email or password"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn malformed_email_never_reaches_the_provider(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.auth_server)
        .await;

    let response = app
        .post_form(
            "/admin/login",
            &[("email", "not-an-email"), ("password", "hunter2")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestApp)]
#[tokio::test]
async fn logout_clears_the_session(app: &mut TestApp) {
    sign_in(app).await;

    Mock::given(method("DELETE"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.post("/admin/logout").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin");

    let response = app.get("/admin/home").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin");
}

#[test_context(TestApp)]
#[tokio::test]
async fn garbage_session_cookie_is_rejected(app: &mut TestApp) {
    let url = app.address.parse().unwrap();
    app.cookie_jar
        .add_cookie_str("session=not-a-real-token", &url);

    let response = app.get("/admin/members").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin");
}

// The local session must end even when the provider call fails.
#[test_context(TestApp)]
#[tokio::test]
async fn logout_survives_provider_failure(app: &mut TestApp) {
    sign_in(app).await;

    Mock::given(method("DELETE"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.auth_server)
        .await;

    let response = app.post("/admin/logout").await;
    assert_eq!(response.status().as_u16(), 303);

    let response = app.get("/admin/home").await;
    assert_eq!(response.status().as_u16(), 303);
}

#[test_context(TestApp)]
#[tokio::test]
async fn provider_outage_shows_the_error_page(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.auth_server)
        .await;

    let response = app
        .post_form(
            "/admin/login",
            &[("email", EDITOR_EMAIL), ("password", "hunter2")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 500);
}
