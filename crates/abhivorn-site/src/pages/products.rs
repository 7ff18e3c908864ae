use maud::{html, Markup};

use super::components::page_hero;
use super::{PageContext, PageModule};
use crate::routing::PageId;

/// A SaaS product card, shared by the products and services pages.
pub(super) struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub stats: &'static [(&'static str, &'static str)],
    pub pricing: &'static str,
    pub badge: &'static str,
    pub page: PageId,
}

pub(super) const PRODUCTS: [Product; 2] = [
    Product {
        name: "VORN HR",
        tagline: "Complete HR Management System",
        description: "Transform your HR operations with our comprehensive HRMS solution. From attendance tracking to performance management, VORN HR handles it all.",
        features: &[
            "Employee Management & Database",
            "Facial Recognition Attendance",
            "Leave & Performance Management",
            "Payroll & Compensation",
            "Mobile Apps (iOS & Android)",
            "HR Analytics & Reports",
        ],
        stats: &[("10+", "Companies"), ("5,000+", "Employees"), ("99.8%", "Uptime")],
        pricing: "Starting at ₹5,000/month",
        badge: "Most Popular",
        page: PageId::VornHr,
    },
    Product {
        name: "VorQard",
        tagline: "QR-Based Healthcare Management",
        description: "Streamline your healthcare operations with our intelligent patient management system. Reduce wait times and improve patient satisfaction.",
        features: &[
            "Patient Management System",
            "QR-Based Check-in",
            "Appointment Scheduling",
            "Billing & Invoicing",
            "Medical Records Management",
            "Analytics Dashboard",
        ],
        stats: &[("HIPAA", "Compliant"), ("40%", "Wait Time ↓"), ("Beta", "Available")],
        pricing: "Beta Access Available",
        badge: "Beta Program",
        page: PageId::VorQard,
    },
];

pub(super) fn product_card(product: &Product) -> Markup {
    html! {
        article class="card product" {
            span class="badge" { (product.badge) }
            h3 { (product.name) }
            p class="tagline" { (product.tagline) }
            p { (product.description) }
            ul class="features" {
                @for feature in product.features {
                    li { (feature) }
                }
            }
            div class="stats" {
                @for (value, label) in product.stats {
                    div class="stat" { strong { (value) } span { (label) } }
                }
            }
            p class="pricing" { (product.pricing) }
            @if let Some(href) = product.page.path() {
                a href=(href) class="btn" { "Learn More" }
            }
        }
    }
}

pub(super) struct ProductsPage;

impl PageModule for ProductsPage {
    fn render(&self, _ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::Products.heading(),
                "Purpose-built platforms for HR teams and healthcare providers.",
            ))
            section class="grid" {
                @for product in &PRODUCTS {
                    (product_card(product))
                }
            }
            section class="cta-band" {
                h2 { "Not sure which product fits?" }
                a href="/contact" class="btn" { "Talk to Our Team" }
            }
        }
    }
}
