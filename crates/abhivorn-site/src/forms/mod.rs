//! Contact and job-application form flows.

mod application;
mod contact;
mod model;
mod toast;
mod validation;

pub use application::{
    ApplicationForm, MissingPositionPolicy, ACCEPTED_RESUME_EXTENSIONS, MAX_RESUME_BYTES,
    OVERSIZED_RESUME_MESSAGE,
};
pub use contact::ContactForm;
pub use model::{ContactInquiry, JobApplication, PositionChoice, ResumeFile};
pub use toast::{Toast, ToastLevel, DEFAULT_TOAST_DURATION, EXTENDED_TOAST_DURATION};
pub use validation::{is_email_shaped, FieldError, FormError};

/// Where a form instance stands in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Pending,
    Succeeded,
    Failed(String),
}

/// Shown to the operator when provider credentials are missing.
pub(crate) const SETUP_MESSAGE: &str =
    "Email delivery is not configured. Set the EMAILJS_* credentials in the site environment.";
