use maud::{html, Markup};

use super::components::{chip_list, page_hero};
use super::{PageContext, PageModule};
use crate::routing::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Healthcare,
    Finance,
    Enterprise,
    Hrms,
    Costeta,
}

impl Industry {
    /// Tabs offered above the case-study grid, after "All".
    pub const FILTERS: [Industry; 4] = [
        Industry::Healthcare,
        Industry::Costeta,
        Industry::Enterprise,
        Industry::Hrms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Enterprise => "Enterprise",
            Industry::Hrms => "HRMS",
            Industry::Costeta => "Costeta",
        }
    }

    /// Parses a filter tab value; "All" and unknown values mean no filter.
    pub fn from_filter(raw: &str) -> Option<Self> {
        Self::FILTERS
            .into_iter()
            .chain([Industry::Finance])
            .find(|industry| industry.label().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug)]
pub struct CaseStudy {
    pub company: &'static str,
    pub industry: Industry,
    pub headline: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: [(&'static str, &'static str); 3],
    pub technologies: &'static [&'static str],
    pub timeline: &'static str,
}

static CASE_STUDIES: [CaseStudy; 6] = [
    CaseStudy {
        company: "Elevate Rootz",
        industry: Industry::Healthcare,
        headline: "How Elevate Rootz onboarded 100+ patients in their first month",
        challenge: "The wellness center had no patient management system, relied on manual appointment booking, and struggled with follow-up tracking.",
        solution: "We built a custom CRM with an integrated booking system, automated reminders, and a patient portal for seamless engagement.",
        results: [("100+", "Patients in Month 1"), ("80%", "Booking Time Reduction"), ("95%", "Patient Satisfaction")],
        technologies: &["React", "Django", "PostgreSQL", "AWS"],
        timeline: "9 weeks",
    },
    CaseStudy {
        company: "US Mortgage Processing",
        industry: Industry::Finance,
        headline: "Achieving 98.5% data extraction accuracy for mortgage documents",
        challenge: "Manual processing of mortgage documents was time-consuming, error-prone, and created bottlenecks in the approval process.",
        solution: "We developed an OCR-powered document extraction system that automatically captures and validates data from mortgage applications.",
        results: [("98.5%", "Extraction Accuracy"), ("85%", "Time Reduction"), ("3x", "Processing Capacity")],
        technologies: &["Python", "OCR", "AWS Lambda", "PostgreSQL"],
        timeline: "8 weeks",
    },
    CaseStudy {
        company: "VorQard",
        industry: Industry::Healthcare,
        headline: "Revolutionizing Patient Flow with QR-Based Management",
        challenge: "Clinics struggled with manual patient registration, long queues, and managing physical patient records efficiently.",
        solution: "Implemented VorQard, a comprehensive QR-based system for instant check-ins, digital medical records, and automated billing.",
        results: [("40%", "Wait Time Reduction"), ("100%", "Digital Data"), ("HIPAA", "Compliant")],
        technologies: &["React", "Node.js", "PostgreSQL", "QR Integration"],
        timeline: "In Progress",
    },
    CaseStudy {
        company: "Insurance HRMS",
        industry: Industry::Hrms,
        headline: "Transforming HR operations for a leading insurance company",
        challenge: "Manual attendance tracking, no performance analytics, and compliance issues with labor regulations.",
        solution: "We deployed VORN HR with biometric integration, automated compliance tracking, and custom HR analytics dashboards.",
        results: [("90%", "Conflict Reduction"), ("70%", "Admin Time Saved"), ("100%", "Compliance Rate")],
        technologies: &["VORN HR", "Biometric Integration", "Power BI"],
        timeline: "3 weeks",
    },
    CaseStudy {
        company: "Abhivorn Issue Pilot",
        industry: Industry::Enterprise,
        headline: "Internal AI-Powered Ticketing and Project Management System",
        challenge: "Managing complex development cycles and client issues across multiple projects without a centralized, intelligent tracking system.",
        solution: "We developed an internal pilot system that uses AI to categorize, prioritize, and assign development tickets based on team velocity and expertise.",
        results: [("100%", "Internal Adoption"), ("40%", "Issue Resolution Speed"), ("25%", "Planning Efficiency")],
        technologies: &["React", "Node.js", "PostgreSQL", "AI/ML"],
        timeline: "Ongoing",
    },
    CaseStudy {
        company: "Costeta",
        industry: Industry::Costeta,
        headline: "Advanced Cost Tracking and Budget Optimization Platform",
        challenge: "A growing enterprise struggled with disparate cost centers and lacked a unified view of real-time expenditures vs budgets.",
        solution: "Built a robust fintech dashboard that aggregates costs from multiple departments, providing real-time alerts and predictive budget forecasting.",
        results: [("15%", "Average Cost Savings"), ("Real-time", "Visibility"), ("100%", "Compliance Rate")],
        technologies: &["Next.js", "TypeScript", "PostgreSQL"],
        timeline: "12 weeks",
    },
];

pub fn case_studies(filter: Option<Industry>) -> impl Iterator<Item = &'static CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(move |study| filter.map_or(true, |industry| study.industry == industry))
}

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Abhivorn's HRMS solution transformed our HR operations. We've seen a 70% reduction in administrative work.", "HR Director", "Insurance Company"),
    ("The document extraction system exceeded our expectations with 98.5% accuracy. It's been a game-changer for our mortgage processing.", "Operations Manager", "Mortgage Processing Firm"),
    ("Professional team, excellent communication, and delivered on time. We highly recommend Abhivorn for healthcare solutions.", "Founder", "Elevate Rootz"),
];

fn filter_tab(label: &str, href: &str, active: bool) -> Markup {
    html! {
        a href=(href) class=(if active { "tab active" } else { "tab" }) aria-current=[active.then_some("page")] {
            (label)
        }
    }
}

pub(super) struct ProjectsPage;

impl PageModule for ProjectsPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        let filter = ctx.location.query_param("industry").and_then(Industry::from_filter);

        html! {
            (page_hero(
                PageId::Projects.heading(),
                "Case studies from healthcare, finance, and enterprise teams we have shipped for.",
            ))
            section id="case-studies" {
                nav class="filters" {
                    (filter_tab("All", "/projects", filter.is_none()))
                    @for industry in Industry::FILTERS {
                        (filter_tab(
                            industry.label(),
                            &format!("/projects?industry={}", industry.label()),
                            filter == Some(industry),
                        ))
                    }
                }
                @for study in case_studies(filter) {
                    article class="card case-study" data-industry=(study.industry.label()) {
                        span class="badge" { (study.industry.label()) }
                        h3 { (study.headline) }
                        p class="company" { (study.company) " · " (study.timeline) }
                        h4 { "Challenge" } p { (study.challenge) }
                        h4 { "Solution" } p { (study.solution) }
                        div class="stats" {
                            @for (metric, label) in study.results {
                                div class="stat" { strong { (metric) } span { (label) } }
                            }
                        }
                        (chip_list(study.technologies))
                    }
                }
            }
            section id="testimonials" {
                h2 { "What Our Clients Say" }
                @for (quote, name, company) in TESTIMONIALS {
                    blockquote {
                        p { (quote) }
                        footer { (name) ", " (company) }
                    }
                }
            }
        }
    }
}
