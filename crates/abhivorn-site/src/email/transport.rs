use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;

use super::error::DispatchError;

/// JSON send request (`/email/send`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonSend {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

/// Multipart send request (`/email/send-form`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSend {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub fields: Vec<(String, String)>,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Raw provider answer; classification happens in the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub text: String,
}

impl ProviderResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound boundary to the provider so the dispatch client can be
/// exercised without network access.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send_json(&self, request: JsonSend) -> Result<ProviderResponse, DispatchError>;
    async fn send_form(&self, request: FormSend) -> Result<ProviderResponse, DispatchError>;
}

/// `reqwest`-backed transport. No retries, no explicit timeout.
#[derive(Debug, Clone)]
pub struct HttpEmailTransport {
    http: Client,
    base_url: String,
}

impl HttpEmailTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> ProviderResponse {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        ProviderResponse { status, text }
    }

    fn transport_error(err: reqwest::Error) -> DispatchError {
        DispatchError::Transport(err.to_string())
    }
}

#[async_trait]
impl EmailTransport for HttpEmailTransport {
    async fn send_json(&self, request: JsonSend) -> Result<ProviderResponse, DispatchError> {
        let response = self
            .http
            .post(self.endpoint("/email/send"))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Ok(Self::read(response).await)
    }

    async fn send_form(&self, request: FormSend) -> Result<ProviderResponse, DispatchError> {
        let FormSend {
            service_id,
            template_id,
            user_id,
            fields,
            attachment,
        } = request;

        let mut form = Form::new()
            .text("service_id", service_id)
            .text("template_id", template_id)
            .text("user_id", user_id);
        for (name, value) in fields {
            form = form.text(name, value);
        }
        if let Some(attachment) = attachment {
            let content_type = attachment
                .content_type
                .parse::<mime::Mime>()
                .unwrap_or(mime::APPLICATION_OCTET_STREAM);
            let part = Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(content_type.as_ref())
                .map_err(Self::transport_error)?;
            form = form.part(attachment.field_name, part);
        }

        let response = self
            .http
            .post(self.endpoint("/email/send-form"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Ok(Self::read(response).await)
    }
}
