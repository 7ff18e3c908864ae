/// Marker the provider puts in its body when an attachment is refused.
pub const SIZE_LIMIT_MARKER: &str = "size limit";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("email provider is not configured: public key is missing")]
    NotConfigured,
    #[error("email client used before initialize()")]
    NotInitialized,
    #[error("provider refused the payload size ({status}): {text}")]
    PayloadTooLarge { status: u16, text: String },
    #[error("provider returned {status}: {text}")]
    Provider { status: u16, text: String },
    #[error("email transport failed: {0}")]
    Transport(String),
}

impl DispatchError {
    /// Classifies a non-success provider response.
    pub fn from_response(status: u16, text: String) -> Self {
        if status == 413 || text.to_ascii_lowercase().contains(SIZE_LIMIT_MARKER) {
            DispatchError::PayloadTooLarge { status, text }
        } else {
            DispatchError::Provider { status, text }
        }
    }

    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, DispatchError::PayloadTooLarge { .. })
    }

    /// Local setup problems, raised before any network call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DispatchError::NotConfigured | DispatchError::NotInitialized
        )
    }
}
