use maud::{html, Markup};

use super::components::chip_list;
use super::{PageContext, PageModule};
use crate::routing::PageId;

struct Offering {
    title: &'static str,
    subtitle: &'static str,
    cta: &'static str,
    href: &'static str,
}

const OFFERINGS: [Offering; 3] = [
    Offering {
        title: "VORN HR",
        subtitle: "Complete HR Management System",
        cta: "Learn More",
        href: "/products/vorn-hr",
    },
    Offering {
        title: "VorQard",
        subtitle: "QR-Based Healthcare Management",
        cta: "Join Beta",
        href: "/products/vorqard",
    },
    Offering {
        title: "Custom Solutions",
        subtitle: "Tailored for Your Business",
        cta: "Start Your Project",
        href: "/services#custom",
    },
];

const STATS: [(&str, &str); 4] = [
    ("10+", "Companies Trust Us"),
    ("5,000+", "Employees Managed"),
    ("99.8%", "System Uptime"),
    ("95%", "Customer Satisfaction"),
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Healthcare", "100+ patients onboarded in first month"),
    ("Finance", "98.5% extraction accuracy"),
    ("Enterprise", "10+ companies deployed"),
];

const TECH_STACK: [&str; 8] = [
    "React",
    "Django",
    "PostgreSQL",
    "AWS",
    "TypeScript",
    "Docker",
    "Python",
    "Tailwind",
];

pub(super) struct HomePage;

impl PageModule for HomePage {
    fn render(&self, _ctx: &PageContext<'_>) -> Markup {
        html! {
            section class="hero" {
                h1 { (PageId::Home.heading()) }
                p class="lead" {
                    "HR management and healthcare SaaS built in Hyderabad, plus custom software for teams that outgrow off-the-shelf tools."
                }
                a href="/contact" class="btn" { "Book a Demo" }
                a href="/products" class="btn secondary" { "Explore Products" }
            }
            section class="offerings" {
                @for offering in &OFFERINGS {
                    article class="card" {
                        h3 { (offering.title) }
                        p { (offering.subtitle) }
                        a href=(offering.href) { (offering.cta) }
                    }
                }
            }
            section class="stats" {
                @for (value, label) in STATS {
                    div class="stat" {
                        strong { (value) }
                        span { (label) }
                    }
                }
            }
            section class="highlights" {
                h2 { "Proven Results" }
                @for (industry, result) in HIGHLIGHTS {
                    article class="card" {
                        span class="badge" { (industry) }
                        p { (result) }
                    }
                }
                a href="/projects" { "View All Projects" }
            }
            section class="tech" {
                h2 { "Built With Modern Technology" }
                (chip_list(&TECH_STACK))
            }
        }
    }
}
