use maud::{html, Markup};

use super::components::{faq_accordion, page_hero};
use super::{PageContext, PageModule};
use crate::routing::PageId;

const FEATURES: [(&str, &str); 6] = [
    ("Patient Management", "Comprehensive patient records with medical history, prescriptions, and treatment plans."),
    ("Smart Appointments", "QR-based check-in, automated scheduling, and real-time queue management."),
    ("QR-Based Access", "Unique QR codes for patients enabling quick identification and record access."),
    ("Analytics Dashboard", "Track patient flow, appointment trends, and operational metrics in real-time."),
    ("HIPAA Compliant", "Enterprise-grade security with encrypted data storage and access controls."),
    ("Billing & Invoicing", "Automated billing, insurance integration, and payment tracking."),
];

const BENEFITS: [(&str, &str); 4] = [
    ("40% Reduction in Wait Times", "Smart queue management and QR-based check-ins eliminate bottlenecks at reception, reducing patient wait times significantly."),
    ("Zero Paperwork", "Digital records, e-prescriptions, and automated documentation eliminate paper-based processes entirely."),
    ("Real-Time Patient Tracking", "Monitor patient journey from check-in to checkout with live status updates and notifications."),
    ("Enhanced Patient Experience", "Patients can book appointments, access records, and receive reminders through our mobile-friendly platform."),
];

const AUDIENCES: [(&str, &str); 3] = [
    ("Clinics & Wellness Centers", "Perfect for small to medium clinics looking to modernize their operations."),
    ("Hospitals & Multi-specialty", "Scalable solution for hospitals with multiple departments and high patient volume."),
    ("Diagnostic Centers", "Streamline sample collection, report generation, and patient communication."),
];

const FAQS: [(&str, &str); 3] = [
    ("What makes VorQard different from other HMS solutions?", "VorQard is built with a QR-first approach, enabling instant patient identification and reducing check-in time to under 10 seconds. Our modern tech stack ensures faster performance and easier customization."),
    ("Is VorQard HIPAA compliant?", "Yes, VorQard is designed with healthcare data security as a priority. We use encrypted storage, role-based access control, audit logs, and follow HIPAA guidelines for protected health information."),
    ("Can VorQard integrate with existing systems?", "VorQard offers APIs for integration with lab systems, pharmacy management, insurance providers, and other healthcare software. Our team provides integration support during implementation."),
];

fn card_grid(items: &[(&str, &str)]) -> Markup {
    html! {
        div class="grid" {
            @for (title, description) in items {
                article class="card" { h3 { (title) } p { (description) } }
            }
        }
    }
}

pub(super) struct VorQardPage;

impl PageModule for VorQardPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::VorQard.heading(),
                "Check patients in with a scan, keep records digital, and keep the waiting room moving.",
            ))
            section id="features" { h2 { "Features" } (card_grid(&FEATURES)) }
            section id="benefits" { h2 { "Why Clinics Choose VorQard" } (card_grid(&BENEFITS)) }
            section id="audiences" { h2 { "Built For" } (card_grid(&AUDIENCES)) }
            section id="beta" class="cta-band" {
                h2 { "Join the Beta Program" }
                p { "Early partners get priority onboarding and direct input on the roadmap." }
                a href="/contact" class="btn" { "Request Beta Access" }
            }
            (faq_accordion(ctx.location, &FAQS))
        }
    }
}
