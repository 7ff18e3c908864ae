use maud::{html, Markup};

use super::components::page_hero;
use super::{PageContext, PageModule};
use crate::routing::PageId;

const VALUES: [(&str, &str); 4] = [
    ("Excellence", "We strive for the highest quality in every line of code and every user interaction."),
    ("Innovation", "We embrace new technologies and creative solutions to solve complex problems."),
    ("Integrity", "We build trust through transparency, honesty, and ethical business practices."),
    ("Ownership", "We take full responsibility for our work and deliver on our commitments."),
];

const MILESTONES: [(&str, &str); 4] = [
    ("Company Founded", "Abhivorn Technologies Pvt Ltd established in Hyderabad"),
    ("First HRMS Deployment", "Successfully deployed VORN HR for first client"),
    ("5 Companies Onboarded", "Rapid growth with multiple enterprise clients"),
    ("5,000+ Users Milestone", "Platform scaling with high user adoption"),
];

const TEAM: [(&str, &str); 2] = [
    ("Neelam Arun", "Founder & Lead Developer"),
    ("Palle Akshith", "Co-Founder"),
];

pub(super) struct AboutPage;

impl PageModule for AboutPage {
    fn render(&self, _ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::About.heading(),
                "An MSME-registered technology company delivering HR and healthcare platforms to growing businesses.",
            ))
            section id="values" {
                h2 { "Our Values" }
                div class="grid" {
                    @for (title, description) in VALUES {
                        article class="card" {
                            h3 { (title) }
                            p { (description) }
                        }
                    }
                }
            }
            section id="journey" {
                h2 { "Our Journey" }
                ol class="timeline" {
                    @for (title, description) in MILESTONES {
                        li {
                            strong { (title) }
                            p { (description) }
                        }
                    }
                }
            }
            section id="team" {
                h2 { "Leadership" }
                div class="grid" {
                    @for (name, role) in TEAM {
                        article class="card" {
                            h3 { (name) }
                            p { (role) }
                        }
                    }
                }
            }
        }
    }
}
