use test_context::test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    body, location, mock_partners, png_part, sign_in, TestApp,
};

fn sample_partners() -> serde_json::Value {
    serde_json::json!({
        "totalCount": 1,
        "partners": [{
            "id": 1,
            "name": "Acme Corp",
            "logoUrl": "/assets/partners/acme.png"
        }]
    })
}

#[test_context(TestApp)]
#[tokio::test]
async fn panel_renders_the_partner_list(app: &mut TestApp) {
    sign_in(app).await;
    mock_partners(app, sample_partners()).await;

    let html = body(app.get("/admin/partners").await).await;
    assert!(html.contains("Total Count: 1"));
    assert!(html.contains("Acme Corp"));
    assert!(html.contains("/admin/partners?modal=add"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn add_without_required_fields_makes_no_backend_call(
    app: &mut TestApp,
) {
    sign_in(app).await;
    mock_partners(app, sample_partners()).await;

    Mock::given(method("POST"))
        .and(path("/partners/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend_server)
        .await;

    let form = reqwest::multipart::Form::new().text("name", "No Logo Inc");
    let response = app.post_multipart("/admin/partners/add", form).await;
    assert_eq!(response.status().as_u16(), 303);

    let html = body(app.get("/admin/partners?modal=add").await).await;
    assert!(html.contains("Name and Logo are required"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn successful_add_invalidates_the_cached_list(app: &mut TestApp) {
    sign_in(app).await;

    Mock::given(method("GET"))
        .and(path("/partners"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_partners()),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.backend_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "totalCount": 2,
                "partners": [
                    { "id": 1, "name": "Acme Corp", "logoUrl": "/a.png" },
                    { "id": 2, "name": "Globex", "logoUrl": "/g.png" }
                ]
            }),
        ))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/partners/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let before = body(app.get("/admin/partners").await).await;
    assert!(!before.contains("Globex"));

    let form = reqwest::multipart::Form::new()
        .text("name", "Globex")
        .text("websiteUrl", "https://globex.example.com")
        .part("logo", png_part());
    let response = app.post_multipart("/admin/partners/add", form).await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/admin/partners");

    let after = body(app.get("/admin/partners").await).await;
    assert!(after.contains("Globex"));
    assert!(after.contains("Partner added successfully!"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn delete_flow_confirms_then_fires(app: &mut TestApp) {
    sign_in(app).await;
    mock_partners(app, sample_partners()).await;

    let confirm =
        body(app.get("/admin/partners?modal=delete&id=1").await).await;
    assert!(confirm.contains("Are you sure you want to delete Acme Corp?"));

    Mock::given(method("DELETE"))
        .and(path("/partners/delete/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    let response = app.post("/admin/partners/delete/1").await;
    assert_eq!(response.status().as_u16(), 303);

    let html = body(app.get("/admin/partners").await).await;
    assert!(html.contains("Partner deleted successfully!"));
}
