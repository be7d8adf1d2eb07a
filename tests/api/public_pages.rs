use test_context::test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    body, mock_members, mock_partners, mock_projects, TestApp,
};

#[test_context(TestApp)]
#[tokio::test]
async fn home_and_recruitment_render(app: &mut TestApp) {
    let html = body(app.get("/").await).await;
    assert!(html.contains("Portico"));

    let html = body(app.get("/recruitment").await).await;
    assert!(html.contains("Recruitment"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn unknown_paths_get_the_not_found_view(app: &mut TestApp) {
    let response = app.get("/no-such-page").await;
    assert_eq!(response.status().as_u16(), 404);

    let html = body(response).await;
    assert!(html.contains("Page not found"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn members_page_orders_exec_then_non_exec(app: &mut TestApp) {
    mock_members(
        app,
        serde_json::json!({
            "totalCount": 5,
            "exec": [
                { "id": 1, "name": "Tied Later", "relativeOrder": 10 },
                { "id": 2, "name": "Unslotted" },
                { "id": 3, "name": "First", "relativeOrder": 1 }
            ],
            "nonExec": [
                { "id": 4, "name": "Zoe", "relativeOrder": 1 },
                { "id": 5, "name": "Amir", "relativeOrder": 99 }
            ]
        }),
    )
    .await;

    let html = body(app.get("/members").await).await;

    // Exec: explicit order first, then the tied pair in input order.
    // Non-exec: alphabetical, relativeOrder ignored.
    let positions: Vec<usize> =
        ["First", "Tied Later", "Unslotted", "Amir", "Zoe"]
            .iter()
            .map(|name| {
                html.find(&format!("<h3>{name}</h3>"))
                    .unwrap_or_else(|| panic!("missing card for {name}"))
            })
            .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "cards are out of order");
}

#[test_context(TestApp)]
#[tokio::test]
async fn members_page_has_no_admin_controls(app: &mut TestApp) {
    mock_members(
        app,
        serde_json::json!({
            "totalCount": 1,
            "exec": [],
            "nonExec": [{ "id": 1, "name": "B" }]
        }),
    )
    .await;

    let html = body(app.get("/members").await).await;
    assert!(!html.contains("modal=edit"));
    assert!(!html.contains("modal=delete"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn portfolio_renders_projects_and_partners(app: &mut TestApp) {
    mock_projects(
        app,
        serde_json::json!({
            "totalCount": 1,
            "projects": [{
                "id": 1,
                "name": "River Cleanup",
                "imageUrl": "/assets/projects/river.jpg",
                "description": "A summer of fishing plastic out of the river."
            }]
        }),
    )
    .await;
    mock_partners(
        app,
        serde_json::json!({
            "totalCount": 1,
            "partners": [{
                "id": 1,
                "name": "Acme Corp",
                "logoUrl": "/assets/partners/acme.png",
                "websiteUrl": "https://acme.example.com"
            }]
        }),
    )
    .await;

    let html = body(app.get("/portfolio").await).await;
    assert!(html.contains("River Cleanup"));
    assert!(html.contains("Acme Corp"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn backend_outage_shows_the_generic_error_view(app: &mut TestApp) {
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend_server)
        .await;

    let response = app.get("/members").await;
    assert_eq!(response.status().as_u16(), 502);

    let html = body(response).await;
    assert!(html.contains("Something went wrong"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn public_and_admin_share_the_cached_roster(app: &mut TestApp) {
    // One backend read serves both surfaces
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "totalCount": 1,
                "exec": [],
                "nonExec": [{ "id": 1, "name": "B" }]
            }),
        ))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let first = body(app.get("/members").await).await;
    let second = body(app.get("/members").await).await;
    assert!(first.contains("<h3>B</h3>"));
    assert!(second.contains("<h3>B</h3>"));
}
