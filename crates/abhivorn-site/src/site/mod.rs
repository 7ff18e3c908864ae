//! Ties the route table, page loader, layout shell, and form flows together
//! into rendered documents.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::config::{AppConfig, CareersConfig};
use crate::email::EmailDispatchClient;
use crate::forms::{ApplicationForm, ContactForm, FormError, MissingPositionPolicy, ResumeFile, Toast};
use crate::pages::components::{error_boundary, loading_placeholder, toast};
use crate::pages::{BuiltinPages, PageContext, CONTACT_FORM_ANCHOR, APPLY_ANCHOR};
use crate::routing::{
    LoadError, LoadState, Location, PageId, PageLoader, RouteTable, RouteTableError,
};
use crate::shell::render::render_document;
use crate::shell::LayoutShell;

/// How long a first visit waits on a page module before the spinner is
/// served instead. The load keeps running and the placeholder reloads.
pub const LOAD_PLACEHOLDER_AFTER: Duration = Duration::from_millis(1500);

/// A finished HTML document plus the status it should be served with.
#[derive(Debug)]
pub struct RenderedPage {
    pub page: PageId,
    pub status: StatusCode,
    pub markup: Markup,
}

impl RenderedPage {
    pub fn into_string(self) -> String {
        self.markup.into_string()
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        (self.status, self.markup).into_response()
    }
}

/// Form state to show when a page is re-rendered after a submission.
#[derive(Debug, Default, Clone, Copy)]
struct FormView<'a> {
    contact: Option<&'a ContactForm>,
    application: Option<&'a ApplicationForm>,
    error: Option<&'a FormError>,
    toast: Option<&'a Toast>,
}

pub struct Site {
    routes: RouteTable,
    loader: Arc<PageLoader>,
    email: Arc<EmailDispatchClient>,
    careers: CareersConfig,
}

impl Site {
    pub fn new(
        routes: RouteTable,
        loader: PageLoader,
        email: Arc<EmailDispatchClient>,
        careers: CareersConfig,
    ) -> Self {
        Self {
            routes,
            loader: Arc::new(loader),
            email,
            careers,
        }
    }

    /// Standard routes, built-in pages, and the HTTP email transport.
    pub fn from_config(config: &AppConfig) -> Result<Self, RouteTableError> {
        Ok(Self::new(
            RouteTable::standard()?,
            PageLoader::new(BuiltinPages),
            Arc::new(EmailDispatchClient::from_config(config.email.clone())),
            config.careers,
        ))
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn email(&self) -> &EmailDispatchClient {
        &self.email
    }

    /// Fresh application form carrying the configured missing-position policy.
    pub fn application_form(&self) -> ApplicationForm {
        ApplicationForm::new(MissingPositionPolicy::from(self.careers))
    }

    pub async fn render(&self, location: Location) -> RenderedPage {
        self.compose(location, FormView::default()).await
    }

    /// Runs the contact flow and re-renders the contact page around the
    /// outcome.
    pub async fn submit_contact(&self, mut form: ContactForm) -> RenderedPage {
        let location = contact_location();
        match form.submit(&self.email).await {
            Ok(notice) => {
                let view = FormView {
                    contact: Some(&form),
                    toast: Some(&notice),
                    ..FormView::default()
                };
                self.compose(location, view).await
            }
            Err(err) => {
                tracing::debug!(error = %err, "contact form rejected before dispatch");
                let view = FormView {
                    contact: Some(&form),
                    error: Some(&err),
                    ..FormView::default()
                };
                self.compose_with_status(location, view, StatusCode::UNPROCESSABLE_ENTITY)
                    .await
            }
        }
    }

    /// Runs the application flow. A rejected resume stops the flow before
    /// validation, the same way picking the file would in the browser.
    pub async fn submit_application(
        &self,
        mut form: ApplicationForm,
        resume: Option<ResumeFile>,
    ) -> RenderedPage {
        let location = apply_location();

        if let Some(file) = resume {
            if let Err(notice) = form.select_resume(file) {
                let view = FormView {
                    application: Some(&form),
                    toast: Some(&notice),
                    ..FormView::default()
                };
                return self
                    .compose_with_status(location, view, StatusCode::UNPROCESSABLE_ENTITY)
                    .await;
            }
        }

        match form.submit(&self.email).await {
            Ok(notice) => {
                let view = FormView {
                    application: Some(&form),
                    toast: Some(&notice),
                    ..FormView::default()
                };
                self.compose(location, view).await
            }
            Err(err) => {
                tracing::debug!(error = %err, "application rejected before dispatch");
                let view = FormView {
                    application: Some(&form),
                    error: Some(&err),
                    ..FormView::default()
                };
                self.compose_with_status(location, view, StatusCode::UNPROCESSABLE_ENTITY)
                    .await
            }
        }
    }

    /// Resolves the page module, giving up on waiting after
    /// `LOAD_PLACEHOLDER_AFTER` while the load finishes in the background.
    async fn load(&self, page: PageId) -> LoadState {
        if let ready @ LoadState::Ready(_) = self.loader.state(page) {
            return ready;
        }

        let loader = Arc::clone(&self.loader);
        let pending = tokio::spawn(async move { loader.resolve(page).await });
        match tokio::time::timeout(LOAD_PLACEHOLDER_AFTER, pending).await {
            Ok(Ok(state)) => state,
            Ok(Err(join)) => LoadState::Failed(LoadError::Unavailable {
                page,
                reason: join.to_string(),
            }),
            Err(_) => {
                tracing::debug!(?page, "page module still loading, serving placeholder");
                LoadState::Loading
            }
        }
    }

    /// Re-renders the application form after an upload that ran past the
    /// request body limit. Fields read before the cut-off are kept.
    pub async fn reject_oversized_upload(&self, mut form: ApplicationForm) -> RenderedPage {
        tracing::warn!("resume upload exceeded the request body limit");
        let notice = form.reject_oversized_resume();
        let view = FormView {
            application: Some(&form),
            toast: Some(&notice),
            ..FormView::default()
        };
        self.compose_with_status(apply_location(), view, StatusCode::UNPROCESSABLE_ENTITY)
            .await
    }

    async fn compose(&self, location: Location, view: FormView<'_>) -> RenderedPage {
        self.compose_with_status(location, view, StatusCode::OK).await
    }

    async fn compose_with_status(
        &self,
        location: Location,
        view: FormView<'_>,
        status: StatusCode,
    ) -> RenderedPage {
        let route = self.routes.resolve(&location);
        let mut shell = LayoutShell::new();
        let directive = shell.navigate(route.location.clone());
        let state = self.load(route.page).await;

        let mut ctx = PageContext::new(&route.location).with_form_error(view.error);
        if let Some(form) = view.contact {
            ctx = ctx.with_contact(form);
        }
        if let Some(form) = view.application {
            ctx = ctx.with_application(form);
        }

        let (body, status) = match &state {
            LoadState::Ready(module) if route.is_fallback() => {
                (module.render(&ctx), StatusCode::NOT_FOUND)
            }
            LoadState::Ready(module) => (module.render(&ctx), status),
            LoadState::Loading => (loading_placeholder(), StatusCode::OK),
            LoadState::Failed(err) => (
                error_boundary(&route.location, err),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        };

        let content = html! {
            @if let Some(notice) = view.toast {
                (toast(notice))
            }
            (body)
        };

        RenderedPage {
            page: route.page,
            status,
            markup: render_document(&shell, route.page, &directive, content),
        }
    }
}

fn contact_location() -> Location {
    Location::parse("/contact").with_fragment(CONTACT_FORM_ANCHOR)
}

fn apply_location() -> Location {
    Location::parse("/careers").with_fragment(APPLY_ANCHOR)
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("routes", &self.routes)
            .field("email", &self.email)
            .field("careers", &self.careers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
