use super::model::ContactInquiry;
use super::toast::Toast;
use super::validation::{is_email_shaped, optional, require, FieldError, FormError};
use super::{SubmissionPhase, SETUP_MESSAGE};
use crate::catalog::{InquiryType, CONTACT_EMAIL};
use crate::email::{DispatchError, EmailDispatchClient};

/// Controlled state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Raw selector value; mapped onto [`InquiryType`] during validation.
    pub inquiry_type: String,
    pub message: String,
    pub consent: bool,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.phase != SubmissionPhase::Pending
    }

    pub fn validate(&self) -> Result<ContactInquiry, FormError> {
        let mut errors = Vec::new();

        require(&mut errors, "name", &self.name, "Name is required");
        if require(&mut errors, "email", &self.email, "Email is required")
            && !is_email_shaped(&self.email)
        {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }
        let inquiry_type = if require(
            &mut errors,
            "inquiry_type",
            &self.inquiry_type,
            "Select an inquiry type",
        ) {
            let parsed = InquiryType::from_label(&self.inquiry_type);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "inquiry_type",
                    "Select one of the listed inquiry types",
                ));
            }
            parsed
        } else {
            None
        };
        require(&mut errors, "message", &self.message, "Message is required");

        match inquiry_type {
            Some(inquiry_type) if errors.is_empty() => Ok(ContactInquiry {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: optional(&self.phone),
                company: optional(&self.company),
                inquiry_type,
                message: self.message.trim().to_string(),
                consent: self.consent,
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }

    /// Validates and moves to `Pending`. Nothing is dispatched when this fails.
    pub fn begin_submit(&mut self) -> Result<ContactInquiry, FormError> {
        if self.phase == SubmissionPhase::Pending {
            return Err(FormError::AlreadyPending);
        }
        let inquiry = self.validate()?;
        self.phase = SubmissionPhase::Pending;
        Ok(inquiry)
    }

    /// Applies the dispatch result: success clears every field, failure keeps
    /// them for correction.
    pub fn complete(&mut self, result: Result<(), DispatchError>) -> Toast {
        match result {
            Ok(()) => {
                *self = Self {
                    phase: SubmissionPhase::Succeeded,
                    ..Self::default()
                };
                Toast::success("Thank you! We'll respond within 24 hours.")
            }
            Err(err) => {
                tracing::error!(error = %err, "contact message failed");
                self.phase = SubmissionPhase::Failed(err.to_string());
                if err.is_configuration() {
                    Toast::error(SETUP_MESSAGE)
                } else {
                    Toast::error(format!(
                        "Failed to send your message. Please try again or email us directly at {CONTACT_EMAIL}"
                    ))
                }
            }
        }
    }

    pub async fn submit(&mut self, client: &EmailDispatchClient) -> Result<Toast, FormError> {
        let inquiry = self.begin_submit()?;
        let result = client.send_contact_message(&inquiry).await;
        Ok(self.complete(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ToastLevel;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Kiran".to_string(),
            email: "kiran@example.com".to_string(),
            inquiry_type: "Partnership Inquiry".to_string(),
            message: "Let's talk".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn each_required_field_blocks_validation() {
        for field in ["name", "email", "inquiry_type", "message"] {
            let mut form = filled();
            match field {
                "name" => form.name.clear(),
                "email" => form.email = "   ".to_string(),
                "inquiry_type" => form.inquiry_type.clear(),
                _ => form.message.clear(),
            }
            let err = form.validate().unwrap_err();
            assert!(err.message_for(field).is_some(), "{field}");
            assert_eq!(err.field_errors().len(), 1, "{field}");
        }
    }

    #[test]
    fn unknown_inquiry_type_is_rejected() {
        let mut form = filled();
        form.inquiry_type = "Free Pizza".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.message_for("inquiry_type"),
            Some("Select one of the listed inquiry types")
        );
    }

    #[test]
    fn optional_fields_become_none_when_blank() {
        let mut form = filled();
        form.phone = "  ".to_string();
        form.company = "Acme".to_string();
        let inquiry = form.validate().expect("valid");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.company.as_deref(), Some("Acme"));
        assert_eq!(inquiry.inquiry_type, InquiryType::Partnership);
    }

    #[test]
    fn pending_form_rejects_second_submit() {
        let mut form = filled();
        form.begin_submit().expect("first submit");
        assert!(!form.is_submit_enabled());
        assert_eq!(form.begin_submit().unwrap_err(), FormError::AlreadyPending);
    }

    #[test]
    fn failure_keeps_fields_and_success_clears_them() {
        let mut form = filled();
        form.begin_submit().expect("submit");
        let toast = form.complete(Err(DispatchError::Provider {
            status: 500,
            text: "boom".to_string(),
        }));
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains(CONTACT_EMAIL));
        assert_eq!(form.name, "Kiran");
        assert!(form.is_submit_enabled());

        form.begin_submit().expect("retry");
        let toast = form.complete(Ok(()));
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(form.phase(), &SubmissionPhase::Succeeded);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(form.inquiry_type.is_empty());
    }

    #[test]
    fn configuration_failure_shows_setup_message() {
        let mut form = filled();
        form.begin_submit().expect("submit");
        let toast = form.complete(Err(DispatchError::NotConfigured));
        assert_eq!(toast.message, SETUP_MESSAGE);
    }
}
