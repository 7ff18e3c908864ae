//! Static catalogs that feed the navigation, selectors, and page content.

mod inquiry;
mod positions;

pub use inquiry::InquiryType;
pub use positions::{open_positions, EmploymentType, OpenPosition, PositionId};

pub const COMPANY_NAME: &str = "Abhivorn Technologies";
pub const HR_RECIPIENT: &str = "Abhivorn Technologies HR";
pub const CONTACT_EMAIL: &str = "hello@abhivorn.com";
pub const CAREERS_EMAIL: &str = "careers@abhivorn.com";
