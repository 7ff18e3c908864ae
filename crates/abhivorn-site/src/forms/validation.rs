use std::fmt;

/// A single rejected field, named by its form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub(crate) const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid form fields: {}", join(.0))]
    Invalid(Vec<FieldError>),
    #[error("a submission from this form is already pending")]
    AlreadyPending,
}

impl FormError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Invalid(errors) => errors,
            FormError::AlreadyPending => &[],
        }
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.field_errors()
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Basic `local@domain.tld` shape, the same bar as a browser's
/// `type="email"` check plus a dotted domain.
pub fn is_email_shaped(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

pub(crate) fn require(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
        false
    } else {
        true
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
