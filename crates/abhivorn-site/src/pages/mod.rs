//! Page modules rendered into the layout shell's content slot.

mod about;
mod careers;
pub mod components;
mod contact;
mod home;
mod not_found;
mod products;
mod projects;
mod services;
mod vorn_hr;
mod vorqard;

use std::sync::Arc;

use async_trait::async_trait;
use maud::Markup;

use crate::forms::{ApplicationForm, ContactForm, FormError};
use crate::routing::{LoadError, Location, PageId, PageSource};

pub use careers::APPLY_ANCHOR;
pub use contact::CONTACT_FORM_ANCHOR;
pub use projects::{case_studies, CaseStudy, Industry};

/// A renderable page body.
pub trait PageModule: Send + Sync {
    fn render(&self, ctx: &PageContext<'_>) -> Markup;
}

/// Request-scoped inputs a page may draw on. Form state is only present
/// when the page is re-rendered after a submission.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub location: &'a Location,
    pub contact: Option<&'a ContactForm>,
    pub application: Option<&'a ApplicationForm>,
    pub form_error: Option<&'a FormError>,
}

impl<'a> PageContext<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            location,
            contact: None,
            application: None,
            form_error: None,
        }
    }

    pub fn with_contact(mut self, form: &'a ContactForm) -> Self {
        self.contact = Some(form);
        self
    }

    pub fn with_application(mut self, form: &'a ApplicationForm) -> Self {
        self.application = Some(form);
        self
    }

    pub fn with_form_error(mut self, error: Option<&'a FormError>) -> Self {
        self.form_error = error;
        self
    }

    pub(crate) fn field_error(&self, field: &str) -> Option<&'static str> {
        self.form_error.and_then(|error| error.message_for(field))
    }
}

pub fn module_for(page: PageId) -> Arc<dyn PageModule> {
    match page {
        PageId::Home => Arc::new(home::HomePage),
        PageId::About => Arc::new(about::AboutPage),
        PageId::Services => Arc::new(services::ServicesPage),
        PageId::Products => Arc::new(products::ProductsPage),
        PageId::Projects => Arc::new(projects::ProjectsPage),
        PageId::Careers => Arc::new(careers::CareersPage),
        PageId::Contact => Arc::new(contact::ContactPage),
        PageId::VornHr => Arc::new(vorn_hr::VornHrPage),
        PageId::VorQard => Arc::new(vorqard::VorQardPage),
        PageId::NotFound => Arc::new(not_found::NotFoundPage),
    }
}

/// Page source backed by the modules compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinPages;

#[async_trait]
impl PageSource for BuiltinPages {
    async fn load(&self, page: PageId) -> Result<Arc<dyn PageModule>, LoadError> {
        Ok(module_for(page))
    }
}
