use crate::catalog::{InquiryType, PositionId};

/// Validated contact form submission. Lives for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
    pub consent: bool,
}

/// Uploaded resume as received from the browser.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

impl std::fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Position carried by an application. `Unspecified` only appears when the
/// careers flow runs with the lenient missing-position policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChoice {
    Open(PositionId),
    Unspecified,
}

impl PositionChoice {
    pub fn label(self) -> &'static str {
        match self {
            PositionChoice::Open(id) => id.title(),
            PositionChoice::Unspecified => "Not specified",
        }
    }
}

/// Validated job application, including the resume attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: PositionChoice,
    pub years_experience: Option<String>,
    pub portfolio_url: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: ResumeFile,
}
