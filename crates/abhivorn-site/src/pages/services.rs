use maud::{html, Markup};

use super::components::{chip_list, page_hero};
use super::products::{product_card, PRODUCTS};
use super::{PageContext, PageModule};
use crate::routing::PageId;

const CUSTOM_SERVICES: [(&str, &str, &[&str]); 6] = [
    ("Web Application Development", "Custom web applications built with modern frameworks", &["React", "Django", "PostgreSQL", "TypeScript"]),
    ("Healthcare Technology", "HIPAA-compliant healthcare management systems", &["Patient Management", "Telemedicine", "EMR Integration"]),
    ("HRMS Implementation", "VORN HR deployment with custom configurations", &["Biometric Integration", "Payroll Setup", "Training"]),
    ("System Integration", "Connect your existing systems seamlessly", &["API Development", "ERP Integration", "CRM Sync"]),
    ("Cloud Architecture", "Scalable cloud infrastructure on AWS", &["AWS", "DevOps", "CI/CD", "Kubernetes"]),
    ("Data Processing", "ETL pipelines and document processing", &["OCR", "Data Extraction", "Automation"]),
];

struct Engagement {
    title: &'static str,
    description: &'static str,
    timeline: &'static str,
    investment: &'static str,
    highlighted: bool,
}

const ENGAGEMENTS: [Engagement; 3] = [
    Engagement {
        title: "Fixed Project",
        description: "Best for well-defined projects with clear requirements",
        timeline: "6-12 weeks",
        investment: "₹2,00,000 - ₹20,00,000",
        highlighted: false,
    },
    Engagement {
        title: "Time & Material",
        description: "Best for evolving requirements and agile development",
        timeline: "Flexible",
        investment: "₹2,000/day or ₹500/hour",
        highlighted: true,
    },
    Engagement {
        title: "Retainer Model",
        description: "Best for ongoing support and maintenance",
        timeline: "20-40 hours/month",
        investment: "₹25,000 - ₹50,000/month",
        highlighted: false,
    },
];

const PROCESS: [(&str, &str); 4] = [
    ("Discovery & Planning", "We understand your requirements, analyze your needs, and create a detailed project plan."),
    ("Design & Development", "Our team designs the solution and develops it using agile methodology with regular updates."),
    ("Testing & Deployment", "Rigorous testing ensures quality, followed by smooth deployment to your environment."),
    ("Support & Maintenance", "Ongoing support, updates, and maintenance to keep your solution running optimally."),
];

pub(super) struct ServicesPage;

impl PageModule for ServicesPage {
    fn render(&self, _ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::Services.heading(),
                "Ready-made SaaS products and custom engineering under one roof.",
            ))
            // Anchor targets for the header's Services sub-links.
            section id="products" {
                h2 { "SaaS Products" }
                div class="grid" {
                    @for product in &PRODUCTS {
                        (product_card(product))
                    }
                }
            }
            section id="custom" {
                h2 { "Custom Development" }
                div class="grid" {
                    @for (title, description, tech) in CUSTOM_SERVICES {
                        article class="card" {
                            h3 { (title) }
                            p { (description) }
                            (chip_list(tech))
                        }
                    }
                }
            }
            section id="engagement" {
                h2 { "Engagement Models" }
                div class="grid" {
                    @for model in &ENGAGEMENTS {
                        article class=(if model.highlighted { "card highlighted" } else { "card" }) {
                            h3 { (model.title) }
                            p { (model.description) }
                            dl {
                                dt { "Timeline" } dd { (model.timeline) }
                                dt { "Investment" } dd { (model.investment) }
                            }
                            a href="/contact" class="btn" { "Discuss Your Project" }
                        }
                    }
                }
            }
            section id="process" {
                h2 { "How We Work" }
                ol class="steps" {
                    @for (title, description) in PROCESS {
                        li { strong { (title) } p { (description) } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Location;

    #[test]
    fn header_anchor_targets_exist() {
        let location = Location::parse("/services#custom");
        let html = ServicesPage.render(&PageContext::new(&location)).into_string();
        assert!(html.contains(r#"id="products""#));
        assert!(html.contains(r#"id="custom""#));
    }
}
