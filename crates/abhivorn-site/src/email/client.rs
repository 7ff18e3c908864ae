use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::DispatchError;
use super::payload::{application_form_fields, contact_template_params};
use super::transport::{
    Attachment, EmailTransport, FormSend, HttpEmailTransport, JsonSend, ProviderResponse,
};
use crate::config::EmailConfig;
use crate::forms::{ContactInquiry, JobApplication};

/// Form field the provider reads the resume from.
const RESUME_FIELD: &str = "file";

/// Composes provider payloads for the two message types and issues exactly
/// one request per call.
pub struct EmailDispatchClient {
    config: EmailConfig,
    transport: Box<dyn EmailTransport>,
    initialized: AtomicBool,
}

impl EmailDispatchClient {
    pub fn new(config: EmailConfig, transport: impl EmailTransport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: EmailConfig) -> Self {
        let transport = HttpEmailTransport::new(&config.api_base_url);
        Self::new(config, transport)
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Safe to call any number of times.
    pub fn initialize(&self) {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return;
        }
        if self.is_configured() {
            tracing::info!(service_id = %self.config.service_id, "email dispatch initialized");
        } else {
            tracing::warn!("email dispatch initialized without a public key; sends will fail");
        }
    }

    fn public_key(&self) -> Result<String, DispatchError> {
        let key = self
            .config
            .public_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(DispatchError::NotConfigured)?;
        if !self.initialized.load(Ordering::Acquire) {
            return Err(DispatchError::NotInitialized);
        }
        Ok(key.to_string())
    }

    pub async fn send_contact_message(&self, inquiry: &ContactInquiry) -> Result<(), DispatchError> {
        let user_id = self.public_key()?;
        let request = JsonSend {
            service_id: self.config.service_id.clone(),
            template_id: self.config.contact_template_id.clone(),
            user_id,
            template_params: contact_template_params(inquiry),
        };

        tracing::info!(inquiry_type = inquiry.inquiry_type.label(), "sending contact message");
        let response = self.transport.send_json(request).await?;
        Self::outcome(response, "contact")
    }

    pub async fn send_application(&self, application: &JobApplication) -> Result<(), DispatchError> {
        let user_id = self.public_key()?;
        let resume = &application.resume;
        let request = FormSend {
            service_id: self.config.service_id.clone(),
            template_id: self.config.application_template_id.clone(),
            user_id,
            fields: application_form_fields(application),
            attachment: Some(Attachment {
                field_name: RESUME_FIELD.to_string(),
                file_name: resume.file_name.clone(),
                content_type: resume.content_type.clone(),
                bytes: resume.bytes.clone(),
            }),
        };

        tracing::info!(
            position = application.position.label(),
            attachment_bytes = resume.size(),
            "sending job application"
        );
        let response = self.transport.send_form(request).await?;
        Self::outcome(response, "application")
    }

    fn outcome(response: ProviderResponse, template: &'static str) -> Result<(), DispatchError> {
        if response.is_success() {
            return Ok(());
        }
        let status = response.status;
        let err = DispatchError::from_response(status, response.text);
        tracing::error!(template, status, error = %err, "email provider rejected send");
        Err(err)
    }
}

impl fmt::Debug for EmailDispatchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailDispatchClient")
            .field("service_id", &self.config.service_id)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InquiryType;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct Recorder {
        json: Arc<Mutex<Vec<JsonSend>>>,
        forms: Arc<Mutex<Vec<FormSend>>>,
        status: u16,
    }

    #[async_trait]
    impl EmailTransport for Recorder {
        async fn send_json(&self, request: JsonSend) -> Result<ProviderResponse, DispatchError> {
            self.json.lock().expect("json mutex").push(request);
            Ok(ProviderResponse {
                status: self.status,
                text: "OK".to_string(),
            })
        }

        async fn send_form(&self, request: FormSend) -> Result<ProviderResponse, DispatchError> {
            self.forms.lock().expect("forms mutex").push(request);
            Ok(ProviderResponse {
                status: self.status,
                text: "OK".to_string(),
            })
        }
    }

    fn config(public_key: Option<&str>) -> EmailConfig {
        EmailConfig {
            service_id: "service_x".to_string(),
            contact_template_id: "template_contact".to_string(),
            application_template_id: "template_apply".to_string(),
            public_key: public_key.map(str::to_string),
            api_base_url: "http://provider.test".to_string(),
        }
    }

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: None,
            company: Some("Clinic".to_string()),
            inquiry_type: InquiryType::VorQardBetaAccess,
            message: "Beta please".to_string(),
            consent: false,
        }
    }

    #[tokio::test]
    async fn missing_key_fails_fast_without_network() {
        let recorder = Recorder {
            status: 200,
            ..Recorder::default()
        };
        let client = EmailDispatchClient::new(config(None), recorder.clone());
        client.initialize();

        let err = client.send_contact_message(&inquiry()).await.unwrap_err();
        assert_eq!(err, DispatchError::NotConfigured);
        assert!(recorder.json.lock().expect("json mutex").is_empty());
    }

    #[tokio::test]
    async fn send_before_initialize_is_rejected() {
        let recorder = Recorder {
            status: 200,
            ..Recorder::default()
        };
        let client = EmailDispatchClient::new(config(Some("pk")), recorder.clone());

        let err = client.send_contact_message(&inquiry()).await.unwrap_err();
        assert_eq!(err, DispatchError::NotInitialized);

        client.initialize();
        client.initialize();
        client
            .send_contact_message(&inquiry())
            .await
            .expect("initialized send succeeds");

        let sent = recorder.json.lock().expect("json mutex");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_id, "pk");
        assert_eq!(sent[0].template_id, "template_contact");
        assert_eq!(sent[0].template_params["company"], "Clinic");
    }

    #[tokio::test]
    async fn provider_413_is_classified_once_without_retry() {
        let recorder = Recorder {
            status: 413,
            ..Recorder::default()
        };
        let client = EmailDispatchClient::new(config(Some("pk")), recorder.clone());
        client.initialize();

        let application = crate::forms::JobApplication {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "99".to_string(),
            position: crate::forms::PositionChoice::Unspecified,
            years_experience: None,
            portfolio_url: None,
            cover_letter: None,
            resume: crate::forms::ResumeFile::new("cv.pdf", "application/pdf", vec![0; 16]),
        };

        let err = client.send_application(&application).await.unwrap_err();
        assert!(err.is_payload_too_large());

        let forms = recorder.forms.lock().expect("forms mutex");
        assert_eq!(forms.len(), 1);
        let attachment = forms[0].attachment.as_ref().expect("resume attached");
        assert_eq!(attachment.field_name, "file");
        assert_eq!(attachment.bytes.len(), 16);
        assert_eq!(forms[0].template_id, "template_apply");
    }
}
