use super::model::{JobApplication, PositionChoice, ResumeFile};
use super::toast::{Toast, EXTENDED_TOAST_DURATION};
use super::validation::{is_email_shaped, optional, require, FieldError, FormError};
use super::{SubmissionPhase, SETUP_MESSAGE};
use crate::catalog::{PositionId, CAREERS_EMAIL};
use crate::config::CareersConfig;
use crate::email::{DispatchError, EmailDispatchClient};

/// Hard ceiling for an attached resume.
pub const MAX_RESUME_BYTES: usize = 500 * 1024;

pub const OVERSIZED_RESUME_MESSAGE: &str = "File size must be less than 500KB";

pub const ACCEPTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// What to do when an application arrives without a selected position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPositionPolicy {
    /// Send it anyway with the "Not specified" placeholder.
    #[default]
    Placeholder,
    Reject,
}

impl From<CareersConfig> for MissingPositionPolicy {
    fn from(config: CareersConfig) -> Self {
        if config.require_position {
            MissingPositionPolicy::Reject
        } else {
            MissingPositionPolicy::Placeholder
        }
    }
}

/// Controlled state of the careers application form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub portfolio: String,
    pub cover_letter: String,
    position: Option<String>,
    resume: Option<ResumeFile>,
    policy: MissingPositionPolicy,
    phase: SubmissionPhase,
}

impl ApplicationForm {
    pub fn new(policy: MissingPositionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn policy(&self) -> MissingPositionPolicy {
        self.policy
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.phase != SubmissionPhase::Pending
    }

    /// Stores the selector's raw value. An empty value clears the selection.
    pub fn select_position(&mut self, raw: &str) {
        self.position = optional(raw);
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Accepts or rejects a freshly picked file. A rejected file also clears
    /// whatever was previously selected.
    pub fn select_resume(&mut self, file: ResumeFile) -> Result<(), Toast> {
        if file.size() > MAX_RESUME_BYTES {
            tracing::warn!(
                file_name = %file.file_name,
                size = file.size(),
                "resume exceeds size limit"
            );
            return Err(self.reject_oversized_resume());
        }

        let accepted = file
            .extension()
            .is_some_and(|ext| ACCEPTED_RESUME_EXTENSIONS.contains(&ext.as_str()));
        if !accepted {
            tracing::warn!(file_name = %file.file_name, "resume has unsupported type");
            self.resume = None;
            return Err(Toast::error("Resume must be a PDF or DOC file"));
        }

        self.resume = Some(file);
        Ok(())
    }

    /// Rejects a file known to be over the ceiling without holding its
    /// bytes, as when the upload itself was cut off at the body limit.
    pub fn reject_oversized_resume(&mut self) -> Toast {
        self.resume = None;
        Toast::error(OVERSIZED_RESUME_MESSAGE)
    }

    pub fn resume_file_name(&self) -> Option<&str> {
        self.resume.as_ref().map(|file| file.file_name.as_str())
    }

    pub fn validate(&self) -> Result<JobApplication, FormError> {
        let mut errors = Vec::new();

        require(&mut errors, "name", &self.name, "Name is required");
        if require(&mut errors, "email", &self.email, "Email is required")
            && !is_email_shaped(&self.email)
        {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }
        require(&mut errors, "phone", &self.phone, "Phone number is required");

        let position = match self.position.as_deref() {
            Some(title) => match PositionId::from_title(title) {
                Some(id) => Some(PositionChoice::Open(id)),
                None => {
                    errors.push(FieldError::new("position", "Select one of the open positions"));
                    None
                }
            },
            None => match self.policy {
                MissingPositionPolicy::Placeholder => {
                    tracing::warn!("no position selected; substituting placeholder");
                    Some(PositionChoice::Unspecified)
                }
                MissingPositionPolicy::Reject => {
                    errors.push(FieldError::new("position", "Select a position"));
                    None
                }
            },
        };

        if self.resume.is_none() {
            errors.push(FieldError::new("resume", "Attach your resume"));
        }

        match (position, &self.resume) {
            (Some(position), Some(resume)) if errors.is_empty() => Ok(JobApplication {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: self.phone.trim().to_string(),
                position,
                years_experience: optional(&self.experience),
                portfolio_url: optional(&self.portfolio),
                cover_letter: optional(&self.cover_letter),
                resume: resume.clone(),
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }

    pub fn begin_submit(&mut self) -> Result<JobApplication, FormError> {
        if self.phase == SubmissionPhase::Pending {
            return Err(FormError::AlreadyPending);
        }
        let application = self.validate()?;
        self.phase = SubmissionPhase::Pending;
        Ok(application)
    }

    /// Applies the dispatch result. Success resets every field including the
    /// position and resume; failure keeps them.
    pub fn complete(&mut self, result: Result<(), DispatchError>) -> Toast {
        match result {
            Ok(()) => {
                *self = Self {
                    policy: self.policy,
                    phase: SubmissionPhase::Succeeded,
                    ..Self::default()
                };
                Toast::success(
                    "Application sent! Please check the bottom of the email for the attached resume.",
                )
            }
            Err(err) => {
                tracing::error!(error = %err, "job application failed");
                self.phase = SubmissionPhase::Failed(err.to_string());
                if err.is_configuration() {
                    Toast::error(SETUP_MESSAGE)
                } else if err.is_payload_too_large() {
                    Toast::error(
                        "Error: 413. Please go to EmailJS Dashboard > Email Services > Edit Service > Allow Attachments.",
                    )
                    .with_duration(EXTENDED_TOAST_DURATION)
                } else {
                    Toast::error(format!(
                        "Failed to submit application. Please try again or email us directly at {CAREERS_EMAIL}"
                    ))
                }
            }
        }
    }

    pub async fn submit(&mut self, client: &EmailDispatchClient) -> Result<Toast, FormError> {
        let application = self.begin_submit()?;
        let result = client.send_application(&application).await;
        Ok(self.complete(result))
    }
}
