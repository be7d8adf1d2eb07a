use test_context::test_context;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{body, TestApp};

const SEND_PATH: &str = "/api/v1.0/email/send";

fn filled() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("subject", "Sponsorship"),
        ("message", "We would like to sponsor a project."),
    ]
}

#[test_context(TestApp)]
#[tokio::test]
async fn contact_page_renders_a_blank_form(app: &mut TestApp) {
    let response = app.get("/contact").await;
    assert_eq!(response.status().as_u16(), 200);

    let html = body(response).await;
    assert!(html.contains("contact-form"));
    assert!(!html.contains("field-error"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn every_missing_field_blocks_the_send(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let expected_errors = [
        ("name", "Name is required"),
        ("email", "Email is required"),
        ("subject", "Subject is required"),
        ("message", "Message is required"),
    ];

    for (missing, expected) in expected_errors {
        let fields: Vec<(&str, &str)> = filled()
            .into_iter()
            .map(|(k, v)| if k == missing { (k, "") } else { (k, v) })
            .collect();

        let response = app.post_form("/contact", &fields).await;
        assert_eq!(response.status().as_u16(), 200);

        let html = body(response).await;
        assert!(html.contains(expected), "expected error for {missing}");
        // The other values stay in the form for the retry
        if missing != "name" {
            assert!(html.contains("Ada Lovelace"));
        }
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn successful_send_clears_the_form(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(serde_json::json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "template_params": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Sponsorship",
                "message": "We would like to sponsor a project."
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("/contact", &filled()).await;
    assert_eq!(response.status().as_u16(), 200);

    let html = body(response).await;
    assert!(html.contains("Email sent successfully!"));
    assert!(html.contains("data-auto-dismiss=\"2000\""));
    assert!(!html.contains("Ada Lovelace"), "form should be cleared");
}

#[test_context(TestApp)]
#[tokio::test]
async fn failed_send_keeps_the_values_for_retry(app: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("/contact", &filled()).await;
    assert_eq!(response.status().as_u16(), 200);

    let html = body(response).await;
    assert!(html.contains("Failed to send email. Please try again."));
    assert!(html.contains("data-persistent"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("We would like to sponsor a project."));
}
