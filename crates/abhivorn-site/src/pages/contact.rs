use maud::{html, Markup};

use super::components::{faq_accordion, field_error, page_hero};
use super::{PageContext, PageModule};
use crate::catalog::{InquiryType, COMPANY_NAME, CONTACT_EMAIL};
use crate::forms::ContactForm;
use crate::routing::PageId;

/// Anchor of the contact form section.
pub const CONTACT_FORM_ANCHOR: &str = "contact-form";

const CONTACT_INFO: [(&str, &str, &str); 4] = [
    ("General Inquiries", CONTACT_EMAIL, "mailto:hello@abhivorn.com"),
    ("Phone", "+91 9876543210", "tel:+919876543210"),
    ("Office", "Hyderabad, Telangana, India", ""),
    ("Business Hours", "Mon-Fri: 9 AM - 6 PM IST", ""),
];

const PRODUCT_CONTACTS: [(&str, &str, &str); 2] = [
    ("VORN HR Product", "hr@abhivorn.com", "www.vornhr.com"),
    ("VorQard (Healthcare)", "healthcare@abhivorn.com", "www.vorqard.com"),
];

const FAQS: [(&str, &str); 6] = [
    ("What industries do you serve?", "We serve a wide range of industries including healthcare, finance, manufacturing, retail, and more. Our solutions are adaptable to any business that needs HR management or healthcare solutions."),
    ("Do you offer free trials?", "Yes! VORN HR offers a freemium plan for up to 20 employees. For larger organizations, we offer a 14-day free trial of our Professional plan."),
    ("What is your typical project timeline?", "For VORN HR implementation, we typically complete deployment within 2-3 weeks. Custom development projects range from 6-12 weeks depending on scope and complexity."),
    ("Do you provide ongoing support?", "Absolutely! All our plans include email support, and our Professional and Enterprise plans include priority support with faster response times."),
    ("Can you integrate with existing systems?", "Yes, we specialize in system integration. Our team can connect VORN HR with your existing ERP, payroll systems, biometric devices, and other enterprise software."),
    ("What are your pricing models?", "We offer flexible pricing: subscription-based for our SaaS products, fixed-price for well-defined projects, and time & material for evolving requirements. Contact us for a custom quote."),
];

pub(super) struct ContactPage;

impl PageModule for ContactPage {
    fn render(&self, ctx: &PageContext<'_>) -> Markup {
        html! {
            (page_hero(
                PageId::Contact.heading(),
                "Tell us about your team, your product, or your project. We respond within 24 hours.",
            ))
            section class="contact-grid" {
                div class="contact-info" {
                    h2 { "Contact Information" }
                    @for (title, content, href) in CONTACT_INFO {
                        div class="info-item" {
                            span class="muted" { (title) }
                            @if href.is_empty() {
                                strong { (content) }
                            } @else {
                                a href=(href) { (content) }
                            }
                        }
                    }
                    h3 { "Product Contacts" }
                    @for (title, email, website) in PRODUCT_CONTACTS {
                        div class="info-item" {
                            strong { (title) }
                            a href=(format!("mailto:{email}")) { (email) }
                            span { (website) }
                        }
                    }
                }
                (contact_form(ctx))
            }
            (faq_accordion(ctx.location, &FAQS))
        }
    }
}

fn contact_form(ctx: &PageContext<'_>) -> Markup {
    let blank = ContactForm::default();
    let form = ctx.contact.unwrap_or(&blank);

    html! {
        div id=(CONTACT_FORM_ANCHOR) class="contact-form" {
            h2 { "Send Us a Message" }
            form method="post" action="/contact" data-single-submit {
                label { "Full Name *" input type="text" name="name" required value=(form.name); }
                (field_error(ctx.field_error("name")))
                label { "Email *" input type="email" name="email" required value=(form.email); }
                (field_error(ctx.field_error("email")))
                label { "Phone" input type="tel" name="phone" value=(form.phone); }
                label { "Company" input type="text" name="company" value=(form.company); }
                label {
                    "Inquiry Type *"
                    select name="inquiry_type" required {
                        option value="" { "Select inquiry type" }
                        @for kind in InquiryType::ALL {
                            option value=(kind.label()) selected[form.inquiry_type == kind.label()] {
                                (kind.label())
                            }
                        }
                    }
                }
                (field_error(ctx.field_error("inquiry_type")))
                label {
                    "Message *"
                    textarea name="message" rows="5" required { (form.message) }
                }
                (field_error(ctx.field_error("message")))
                label class="consent" {
                    input type="checkbox" id="consent" name="consent" value="true" checked[form.consent];
                    "I agree to be contacted by " (COMPANY_NAME) " regarding my inquiry."
                }
                button type="submit" class="btn" disabled[!form.is_submit_enabled()] { "Send Message" }
            }
        }
    }
}
