use axum::http::StatusCode;

use super::common::*;
use crate::config::CareersConfig;
use crate::forms::ContactForm;
use crate::pages::BuiltinPages;

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Kiran Rao".to_string();
    form.email = "kiran@example.com".to_string();
    form.inquiry_type = "VORN HR Demo".to_string();
    form.message = "We have 80 employees.".to_string();
    form.consent = true;
    form
}

#[tokio::test]
async fn valid_inquiry_is_sent_once_and_form_clears() {
    let recorder = Recorder::replying(200, "OK");
    let site = build_site(&recorder, CareersConfig::default());

    let rendered = site.submit_contact(filled()).await;
    assert_eq!(rendered.status, StatusCode::OK);
    assert_eq!(recorder.json_count(), 1);

    let sent = recorder.json.lock().expect("json mutex poisoned");
    assert_eq!(sent[0].template_params["inquiry_type"], "VORN HR Demo");
    assert_eq!(sent[0].template_params["phone"], "Not provided");
    drop(sent);

    let html = rendered.into_string();
    assert!(html.contains("toast success"));
    assert!(html.contains(r#"data-anchor="contact-form""#));
    assert!(!html.contains("Kiran Rao"));
}

#[tokio::test]
async fn missing_required_field_makes_no_request() {
    let recorder = Recorder::replying(200, "OK");
    let site = build_site(&recorder, CareersConfig::default());

    let mut form = filled();
    form.message.clear();
    let rendered = site.submit_contact(form).await;

    assert_eq!(rendered.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(recorder.json_count(), 0);
    let html = rendered.into_string();
    assert!(html.contains("Message is required"));
    assert!(html.contains(r#"value="Kiran Rao""#));
}

#[tokio::test]
async fn provider_failure_keeps_fields_and_shows_generic_toast() {
    let recorder = Recorder::replying(500, "Internal error");
    let site = build_site(&recorder, CareersConfig::default());

    let rendered = site.submit_contact(filled()).await;
    assert_eq!(recorder.json_count(), 1);
    let html = rendered.into_string();
    assert!(html.contains("toast error"));
    assert!(html.contains("hello@abhivorn.com"));
    assert!(html.contains(r#"value="Kiran Rao""#));
}

#[tokio::test]
async fn missing_public_key_fails_before_network() {
    let recorder = Recorder::replying(200, "OK");
    let site = build_site_with(&recorder, None, CareersConfig::default(), BuiltinPages);

    let html = site.submit_contact(filled()).await.into_string();
    assert_eq!(recorder.json_count(), 0);
    assert!(html.contains("Email delivery is not configured"));
}
