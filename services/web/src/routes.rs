use crate::infra::{AppState, UPLOAD_BODY_LIMIT};
use abhivorn_site::error::AppError;
use abhivorn_site::forms::{ContactForm, ResumeFile};
use abhivorn_site::routing::Location;
use abhivorn_site::{RenderedPage, Site};
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Form, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Urlencoded body of the contact form. Missing inputs arrive as empty
/// strings so the form flow reports them as field errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) company: String,
    pub(crate) inquiry_type: String,
    pub(crate) message: String,
    pub(crate) consent: Option<String>,
}

impl From<ContactSubmission> for ContactForm {
    fn from(submission: ContactSubmission) -> Self {
        let mut form = ContactForm::new();
        form.name = submission.name;
        form.email = submission.email;
        form.phone = submission.phone;
        form.company = submission.company;
        form.inquiry_type = submission.inquiry_type;
        form.message = submission.message;
        form.consent = submission
            .consent
            .is_some_and(|value| matches!(value.as_str(), "true" | "on" | "1"));
        form
    }
}

pub(crate) fn site_router(site: Arc<Site>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/contact", get(page_endpoint).post(contact_endpoint))
        .route(
            "/careers/apply",
            get(page_endpoint)
                .post(application_endpoint)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .fallback(page_endpoint)
        .with_state(site)
}

pub(crate) async fn page_endpoint(State(site): State<Arc<Site>>, uri: Uri) -> RenderedPage {
    site.render(Location::from_request(uri.path(), uri.query()))
        .await
}

pub(crate) async fn contact_endpoint(
    State(site): State<Arc<Site>>,
    Form(submission): Form<ContactSubmission>,
) -> RenderedPage {
    site.submit_contact(submission.into()).await
}

pub(crate) async fn application_endpoint(
    State(site): State<Arc<Site>>,
    mut multipart: Multipart,
) -> Result<RenderedPage, AppError> {
    let mut form = site.application_form();
    let mut resume = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) if is_body_limit(&err) => return Ok(site.reject_oversized_upload(form).await),
            Err(err) => return Err(bad_upload(err)),
        };
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let declared = field
                .content_type()
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            let bytes = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(err) if is_body_limit(&err) => {
                    return Ok(site.reject_oversized_upload(form).await)
                }
                Err(err) => return Err(bad_upload(err)),
            };
            // Browsers send an empty, unnamed part when no file was picked.
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }
            let content_type = declared.unwrap_or_else(|| {
                mime_guess::from_path(&file_name)
                    .first_or_octet_stream()
                    .to_string()
            });
            resume = Some(ResumeFile::new(file_name, content_type, bytes.to_vec()));
            continue;
        }

        let value = match field.text().await {
            Ok(value) => value,
            Err(err) if is_body_limit(&err) => return Ok(site.reject_oversized_upload(form).await),
            Err(err) => return Err(bad_upload(err)),
        };
        match name.as_str() {
            "from_name" => form.name = value,
            "from_email" => form.email = value,
            "phone" => form.phone = value,
            "position" => form.select_position(&value),
            "experience" => form.experience = value,
            "portfolio" => form.portfolio = value,
            "cover_letter" => form.cover_letter = value,
            other => tracing::debug!(field = other, "ignoring unknown application field"),
        }
    }

    Ok(site.submit_application(form, resume).await)
}

/// The upload ran past `UPLOAD_BODY_LIMIT`, which only a resume can do.
fn is_body_limit(err: &MultipartError) -> bool {
    err.status() == StatusCode::PAYLOAD_TOO_LARGE
}

fn bad_upload(err: MultipartError) -> AppError {
    AppError::BadRequest(err.to_string())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
