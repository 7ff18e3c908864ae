use serde::Serialize;

/// Every page the site can render, including the catch-all fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    About,
    Services,
    Products,
    Projects,
    Careers,
    Contact,
    VornHr,
    VorQard,
    NotFound,
}

impl PageId {
    pub const ALL: [PageId; 10] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Products,
        PageId::Projects,
        PageId::Careers,
        PageId::Contact,
        PageId::VornHr,
        PageId::VorQard,
        PageId::NotFound,
    ];

    /// Canonical path, `None` for the catch-all page.
    pub fn path(self) -> Option<&'static str> {
        match self {
            PageId::Home => Some("/"),
            PageId::About => Some("/about"),
            PageId::Services => Some("/services"),
            PageId::Products => Some("/products"),
            PageId::Projects => Some("/projects"),
            PageId::Careers => Some("/careers"),
            PageId::Contact => Some("/contact"),
            PageId::VornHr => Some("/products/vorn-hr"),
            PageId::VorQard => Some("/products/vorqard"),
            PageId::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Abhivorn Technologies | HR & Healthcare SaaS",
            PageId::About => "About | Abhivorn Technologies",
            PageId::Services => "Services | Abhivorn Technologies",
            PageId::Products => "Products | Abhivorn Technologies",
            PageId::Projects => "Projects | Abhivorn Technologies",
            PageId::Careers => "Careers | Abhivorn Technologies",
            PageId::Contact => "Contact | Abhivorn Technologies",
            PageId::VornHr => "VORN HR | Abhivorn Technologies",
            PageId::VorQard => "VorQard | Abhivorn Technologies",
            PageId::NotFound => "Page Not Found | Abhivorn Technologies",
        }
    }

    /// Text of the page's top-level heading.
    pub fn heading(self) -> &'static str {
        match self {
            PageId::Home => "Enterprise-Grade HR & Healthcare Solutions",
            PageId::About => "Building the Future of Enterprise Software",
            PageId::Services => "Comprehensive Technology Solutions",
            PageId::Products => "Enterprise-Grade SaaS Solutions",
            PageId::Projects => "Real Results for Real Businesses",
            PageId::Careers => "Build the Future With Us",
            PageId::Contact => "Let's Build Something Great Together",
            PageId::VornHr => "Simplifying HR Management",
            PageId::VorQard => "QR-Based Healthcare Management System",
            PageId::NotFound => "Page Not Found",
        }
    }
}
