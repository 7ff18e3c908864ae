//! Shared fragments: toast, loading placeholder, error boundary, form bits.

use std::time::Duration;

use maud::{html, Markup};

use crate::forms::Toast;
use crate::routing::{LoadError, Location};

pub fn toast(toast: &Toast) -> Markup {
    html! {
        div class=(format!("toast {}", toast.level.css_class()))
            role="status"
            data-toast
            data-duration-ms=(toast.duration.as_millis())
        {
            (toast.message)
        }
    }
}

/// Delay before a served placeholder asks for the page again.
pub const PLACEHOLDER_RELOAD: Duration = Duration::from_secs(1);

/// Centered spinner shown while a page module is still loading. The inline
/// script reloads the page once `data-reload-ms` elapses.
pub fn loading_placeholder() -> Markup {
    html! {
        div class="loader" aria-busy="true" data-reload-ms=(PLACEHOLDER_RELOAD.as_millis()) {
            div class="spinner" {}
        }
    }
}

/// Replaces the content slot when a page module failed to load. The retry
/// link re-requests the same location, which triggers a fresh load.
pub fn error_boundary(location: &Location, error: &LoadError) -> Markup {
    html! {
        section class="error-boundary" role="alert" {
            h1 { "Something went wrong" }
            p { "This page could not be loaded. Check your connection and try again." }
            p class="detail" { code { (error) } }
            a href=(location.path()) class="btn" data-retry { "Retry" }
        }
    }
}

pub(crate) fn page_hero(heading: &str, lead: &str) -> Markup {
    html! {
        section class="hero" {
            h1 { (heading) }
            p class="lead" { (lead) }
        }
    }
}

pub(crate) fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="field-error" role="alert" { (message) }
        }
    }
}

/// Question/answer accordion. `?faq=N` on the current location opens item
/// `N` on first render; the rest start collapsed.
pub(crate) fn faq_accordion(location: &Location, items: &[(&str, &str)]) -> Markup {
    let open = location
        .query_param("faq")
        .and_then(|raw| raw.parse::<usize>().ok());

    html! {
        section id="faq" class="faq" {
            h2 { "Frequently Asked Questions" }
            @for (index, (question, answer)) in items.iter().enumerate() {
                details open[open == Some(index)] {
                    summary { (question) }
                    p { (answer) }
                }
            }
        }
    }
}

pub(crate) fn chip_list(items: &[&str]) -> Markup {
    html! {
        ul class="chips" {
            @for item in items {
                li { (item) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::EXTENDED_TOAST_DURATION;
    use crate::routing::PageId;

    #[test]
    fn toast_carries_level_and_duration() {
        let html = toast(&Toast::error("nope").with_duration(EXTENDED_TOAST_DURATION)).into_string();
        assert!(html.contains(r#"class="toast error""#));
        assert!(html.contains(r#"data-duration-ms="8000""#));
        assert!(html.contains("nope"));
    }

    #[test]
    fn faq_query_opens_one_item() {
        let items = [("Q0", "A0"), ("Q1", "A1")];
        let html = faq_accordion(&Location::parse("/contact?faq=1"), &items).into_string();
        assert_eq!(html.matches("<details open>").count(), 1);
        assert!(html.contains("<details open><summary>Q1"));

        let html = faq_accordion(&Location::parse("/contact?faq=nope"), &items).into_string();
        assert!(!html.contains("<details open>"));
    }

    #[test]
    fn error_boundary_offers_retry_of_same_path() {
        let location = Location::parse("/careers?x=1");
        let error = LoadError::Unavailable {
            page: PageId::Careers,
            reason: "timeout".to_string(),
        };
        let html = error_boundary(&location, &error).into_string();
        assert!(html.contains(r#"href="/careers""#));
        assert!(html.contains("data-retry"));
        assert!(html.contains("timeout"));
    }
}
