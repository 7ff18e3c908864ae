use maud::{html, Markup};

use super::components::{chip_list, field_error, page_hero};
use super::{PageContext, PageModule};
use crate::catalog::{open_positions, CAREERS_EMAIL};
use crate::forms::{
    ApplicationForm, ACCEPTED_RESUME_EXTENSIONS, DEFAULT_TOAST_DURATION, MAX_RESUME_BYTES,
    OVERSIZED_RESUME_MESSAGE,
};
use crate::routing::PageId;

/// Anchor of the application section.
pub const APPLY_ANCHOR: &str = "apply";

const BENEFITS: [(&str, &str); 4] = [
    ("Real Impact", "Ship features used by thousands of employees and patients."),
    ("Mentorship", "Work directly with the founders and senior engineers."),
    ("Flexible Work", "Hybrid setup from Hyderabad or fully remote for most roles."),
    ("Growth Path", "Interns who perform well move into full-time roles."),
];

const HIRING_STEPS: [(&str, &str); 3] = [
    ("Submit Application", "Fill out the form or email your CV to careers@abhivorn.com"),
    ("Technical Interview", "Code review or project discussion based on your role"),
    ("Final Round", "Meet the founders and discuss culture fit"),
];

pub(super) struct CareersPage;

impl PageModule for CareersPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::Careers.heading(),
                "Build the future of enterprise software with us. We're looking for passionate individuals who want to make a real impact.",
            ))
            section id="benefits" {
                h2 { "Why Work With Us?" }
                div class="grid" {
                    @for (title, description) in BENEFITS {
                        article class="card" { h3 { (title) } p { (description) } }
                    }
                }
            }
            section id="positions" {
                h2 { "Open Positions" }
                @for position in open_positions() {
                    article class="card position" {
                        h3 { (position.title) }
                        p class="meta" {
                            span class="badge" { (position.employment.label()) }
                            " " (position.location)
                        }
                        ul {
                            @for item in position.responsibilities {
                                li { (item) }
                            }
                        }
                        (chip_list(position.skills))
                        a class="btn"
                            href=(format!("/careers?position={}#{APPLY_ANCHOR}", encode_query(position.title)))
                        { "Apply Now" }
                    }
                }
            }
            section id="process" {
                h2 { "Hiring Process" }
                ol class="steps" {
                    @for (title, description) in HIRING_STEPS {
                        li { strong { (title) } p { (description) } }
                    }
                }
            }
            (application_section(ctx))
        }
    }
}

fn application_section(ctx: &PageContext<'_>) -> Markup {
    let blank = ApplicationForm::default();
    let form = ctx.application.unwrap_or(&blank);
    let selected = form
        .position()
        .or_else(|| ctx.location.query_param("position"));
    let accept = ACCEPTED_RESUME_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    html! {
        section id=(APPLY_ANCHOR) {
            h2 { "Apply Now" }
            p { "Take the first step towards your new career" }
            form method="post" action="/careers/apply" enctype="multipart/form-data" data-single-submit {
                label { "Full Name *" input type="text" name="from_name" required value=(form.name); }
                (field_error(ctx.field_error("name")))
                label { "Email *" input type="email" name="from_email" required value=(form.email); }
                (field_error(ctx.field_error("email")))
                label { "Phone *" input type="tel" name="phone" required value=(form.phone); }
                (field_error(ctx.field_error("phone")))
                label {
                    "Position *"
                    select name="position" {
                        option value="" { "Select a position" }
                        @for position in open_positions() {
                            option value=(position.title) selected[selected == Some(position.title)] {
                                (position.title)
                            }
                        }
                    }
                }
                (field_error(ctx.field_error("position")))
                label {
                    "Years of Experience"
                    input type="text" name="experience" maxlength="50" placeholder="e.g., 2" value=(form.experience);
                }
                label {
                    "Portfolio / GitHub"
                    input type="text" name="portfolio" maxlength="200"
                        placeholder="https://github.com/username" value=(form.portfolio);
                }
                label {
                    "Cover Letter"
                    textarea name="cover_letter" maxlength="3000" rows="4"
                        placeholder="Tell us why you'd be a great fit..." { (form.cover_letter) }
                }
                // Last so every text field precedes the file in the upload.
                label {
                    "Resume *"
                    input type="file" name="file" accept=(accept) required
                        data-max-bytes=(MAX_RESUME_BYTES)
                        data-size-error=(OVERSIZED_RESUME_MESSAGE)
                        data-toast-ms=(DEFAULT_TOAST_DURATION.as_millis());
                    small { "PDF, DOC up to 500KB" }
                }
                @if let Some(name) = form.resume_file_name() {
                    p class="file-note" { "Previously attached: " (name) ". Select it again to resend." }
                }
                (field_error(ctx.field_error("resume")))
                button type="submit" class="btn" disabled[!form.is_submit_enabled()] { "Submit Application" }
            }
            p class="alt" {
                "Prefer email? Send your CV to "
                a href=(format!("mailto:{CAREERS_EMAIL}")) { (CAREERS_EMAIL) }
            }
        }
    }
}

fn encode_query(value: &str) -> String {
    reqwest::Url::parse_with_params("http://site.invalid/", [("v", value)])
        .ok()
        .and_then(|url| url.query().map(|query| query.trim_start_matches("v=").to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldError, FormError, MissingPositionPolicy};
    use crate::routing::Location;

    #[test]
    fn apply_links_preselect_position_via_query() {
        let location = Location::parse("/careers?position=QA+Engineer+Intern#apply");
        let html = CareersPage.render(&PageContext::new(&location)).into_string();
        assert!(html.contains(r#"id="apply""#));
        assert!(html.contains(r#"href="/careers?position=QA+Engineer+Intern#apply""#));
        assert!(html.contains(r#"<option value="QA Engineer Intern" selected>"#));
        assert!(html.contains("data-single-submit"));
        assert!(html.contains(r#"name="file""#));
    }

    #[test]
    fn file_input_checks_size_before_upload_and_comes_last() {
        let location = Location::parse("/careers");
        let html = CareersPage.render(&PageContext::new(&location)).into_string();
        assert!(html.contains(r#"data-max-bytes="512000""#));
        assert!(html.contains(r#"data-size-error="File size must be less than 500KB""#));

        let cover = html.find(r#"name="cover_letter""#).expect("cover letter field");
        let file = html.find(r#"name="file""#).expect("file field");
        assert!(cover < file);
    }

    #[test]
    fn rerender_keeps_entered_values_and_errors() {
        let mut form = ApplicationForm::new(MissingPositionPolicy::Placeholder);
        form.name = "Asha".to_string();
        let error = FormError::Invalid(vec![FieldError::new("email", "Email is required")]);
        let location = Location::parse("/careers");
        let ctx = PageContext::new(&location)
            .with_application(&form)
            .with_form_error(Some(&error));

        let html = CareersPage.render(&ctx).into_string();
        assert!(html.contains(r#"value="Asha""#));
        assert!(html.contains("Email is required"));
    }
}
