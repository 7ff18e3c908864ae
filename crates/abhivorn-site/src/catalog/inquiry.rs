use serde::{Deserialize, Serialize};

/// Options offered by the contact form's inquiry selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    VornHrDemo,
    VorQardBetaAccess,
    CustomDevelopment,
    Partnership,
    GeneralQuestion,
    CareerOpportunity,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::VornHrDemo,
        InquiryType::VorQardBetaAccess,
        InquiryType::CustomDevelopment,
        InquiryType::Partnership,
        InquiryType::GeneralQuestion,
        InquiryType::CareerOpportunity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::VornHrDemo => "VORN HR Demo",
            InquiryType::VorQardBetaAccess => "VorQard Beta Access",
            InquiryType::CustomDevelopment => "Custom Development Project",
            InquiryType::Partnership => "Partnership Inquiry",
            InquiryType::GeneralQuestion => "General Question",
            InquiryType::CareerOpportunity => "Career Opportunity",
        }
    }

    /// Matches the selector's submitted value; anything outside the list is
    /// rejected rather than forwarded.
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.label() == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_back_to_variants() {
        for kind in InquiryType::ALL {
            assert_eq!(InquiryType::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(InquiryType::from_label(""), None);
        assert_eq!(InquiryType::from_label("vorn hr demo"), None);
        assert_eq!(InquiryType::from_label("Lunch Order"), None);
    }
}
