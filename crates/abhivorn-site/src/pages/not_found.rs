use maud::{html, Markup};

use super::{PageContext, PageModule};
use crate::routing::PageId;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/products", "Our Products"),
    ("/services", "Services"),
    ("/careers", "Careers"),
    ("/contact", "Contact Us"),
];

pub(super) struct NotFoundPage;

impl PageModule for NotFoundPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        html! {
            section class="not-found" {
                span class="code" { "404" }
                h1 { (PageId::NotFound.heading()) }
                p {
                    "Oops! The page you're looking for doesn't exist or has been moved."
                    br;
                    small { "Attempted path: " code { (ctx.location.requested_path()) } }
                }
                a href="/" class="btn" { "Go Home" }
                nav class="quick-links" {
                    @for (href, label) in QUICK_LINKS {
                        a href=(href) { (label) }
                    }
                }
            }
        }
    }
}
