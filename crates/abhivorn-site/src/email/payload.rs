use std::collections::BTreeMap;

use crate::catalog::{COMPANY_NAME, HR_RECIPIENT};
use crate::forms::{ContactInquiry, JobApplication};

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// Named fields of the "contact" template.
pub fn contact_template_params(inquiry: &ContactInquiry) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("from_name".to_string(), inquiry.name.clone()),
        ("from_email".to_string(), inquiry.email.clone()),
        (
            "phone".to_string(),
            or_placeholder(&inquiry.phone, "Not provided"),
        ),
        (
            "company".to_string(),
            or_placeholder(&inquiry.company, "Not provided"),
        ),
        (
            "inquiry_type".to_string(),
            inquiry.inquiry_type.label().to_string(),
        ),
        ("message".to_string(), inquiry.message.clone()),
        ("to_name".to_string(), COMPANY_NAME.to_string()),
    ])
}

/// Text parts of the "application" multipart payload; the resume travels
/// separately as the `file` part.
pub fn application_form_fields(application: &JobApplication) -> Vec<(String, String)> {
    vec![
        ("from_name".to_string(), application.name.clone()),
        ("from_email".to_string(), application.email.clone()),
        ("phone".to_string(), application.phone.clone()),
        (
            "position".to_string(),
            application.position.label().to_string(),
        ),
        (
            "experience".to_string(),
            or_placeholder(&application.years_experience, "Not specified"),
        ),
        (
            "portfolio".to_string(),
            or_placeholder(&application.portfolio_url, "Not provided"),
        ),
        (
            "cover_letter".to_string(),
            or_placeholder(&application.cover_letter, "No cover letter provided"),
        ),
        ("to_name".to_string(), HR_RECIPIENT.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InquiryType, PositionId};
    use crate::forms::{PositionChoice, ResumeFile};

    #[test]
    fn contact_params_fill_optional_fields() {
        let inquiry = ContactInquiry {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            company: Some("  ".to_string()),
            inquiry_type: InquiryType::VornHrDemo,
            message: "Demo for 40 staff".to_string(),
            consent: true,
        };

        let params = contact_template_params(&inquiry);
        assert_eq!(params["phone"], "Not provided");
        assert_eq!(params["company"], "Not provided");
        assert_eq!(params["inquiry_type"], "VORN HR Demo");
        assert_eq!(params["to_name"], COMPANY_NAME);
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn application_fields_use_template_names() {
        let application = JobApplication {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "+91 9000000000".to_string(),
            position: PositionChoice::Open(PositionId::QaEngineerIntern),
            years_experience: Some("1".to_string()),
            portfolio_url: None,
            cover_letter: None,
            resume: ResumeFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]),
        };

        let fields = application_form_fields(&application);
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "from_name",
                "from_email",
                "phone",
                "position",
                "experience",
                "portfolio",
                "cover_letter",
                "to_name"
            ]
        );
        assert_eq!(fields[3].1, "QA Engineer Intern");
        assert_eq!(fields[5].1, "Not provided");
        assert_eq!(fields[6].1, "No cover letter provided");
    }
}
