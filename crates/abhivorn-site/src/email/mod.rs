//! Client for the transactional email provider (EmailJS REST API).

mod client;
mod error;
mod payload;
mod transport;

pub use client::EmailDispatchClient;
pub use error::DispatchError;
pub use payload::{application_form_fields, contact_template_params};
pub use transport::{
    Attachment, EmailTransport, FormSend, HttpEmailTransport, JsonSend, ProviderResponse,
};
