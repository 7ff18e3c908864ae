use maud::{html, Markup};

use super::components::{faq_accordion, page_hero};
use super::{PageContext, PageModule};
use crate::routing::PageId;

const MODULES: [(&str, &str); 6] = [
    ("Smart Recruitment", "Automate hiring workflows"),
    ("Time Tracking", "Geo-fenced attendance"),
    ("Payroll Access", "One-click processing"),
    ("Performance", "360° appraisals & OKRs"),
    ("Compliance", "100% statutory compliant"),
    ("Mobile App", "ESS on the go"),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "Free",
        period: "Forever",
        description: "Perfect for small teams getting started",
    },
    Plan {
        name: "Professional",
        price: "₹10,000",
        period: "/month",
        description: "For growing businesses with advanced needs",
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "Pricing",
        description: "For large organizations with custom requirements",
    },
];

const FAQS: [(&str, &str); 5] = [
    ("How long does implementation take?", "Standard implementation takes 2-3 weeks, including data migration, configuration, and training. For complex requirements, we provide a detailed timeline during the consultation."),
    ("Do you offer training?", "Yes! All plans include initial training for HR admins and managers. We also provide documentation, video tutorials, and ongoing support."),
    ("Can it integrate with our existing systems?", "Absolutely. VORN HR supports integration with popular payroll systems, biometric devices, ERP solutions, and custom APIs for seamless data flow."),
    ("Is our data secure?", "Security is our top priority. We use SSL/TLS encryption, role-based access control, regular backups, and are compliant with data protection regulations."),
    ("What happens if we need customization?", "Our Enterprise plan includes custom development. We can modify workflows, add new modules, and integrate with your specific requirements."),
];

pub(super) struct VornHrPage;

impl PageModule for VornHrPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::VornHr.heading(),
                "VORN HR brings recruitment, attendance, payroll, and performance into one platform your employees actually use.",
            ))
            section id="modules" {
                h2 { "Everything HR, In One Place" }
                div class="grid" {
                    @for (title, description) in MODULES {
                        article class="card" { h3 { (title) } p { (description) } }
                    }
                }
            }
            section id="pricing" {
                h2 { "Simple, Transparent Pricing" }
                div class="grid" {
                    @for plan in &PLANS {
                        article class="card plan" {
                            h3 { (plan.name) }
                            p class="price" { strong { (plan.price) } " " span { (plan.period) } }
                            p { (plan.description) }
                            a href="/contact" class="btn" { "Get Started" }
                        }
                    }
                }
            }
            (faq_accordion(ctx.location, &FAQS))
        }
    }
}
