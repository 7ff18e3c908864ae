/// Entry of the top-level navigation, optionally carrying a flyout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavLink],
}

impl NavLink {
    const fn leaf(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            children: &[],
        }
    }

    pub fn has_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink::leaf("About", "/about"),
    NavLink {
        label: "Services",
        href: "/services",
        children: &[
            NavLink::leaf("SaaS Products", "/services#products"),
            NavLink::leaf("Custom Development", "/services#custom"),
        ],
    },
    NavLink {
        label: "Products",
        href: "/products",
        children: &[
            NavLink::leaf("VORN HR", "/products/vorn-hr"),
            NavLink::leaf("VorQard", "/products/vorqard"),
        ],
    },
    NavLink::leaf("Projects", "/projects"),
    NavLink::leaf("Careers", "/careers"),
    NavLink::leaf("Contact", "/contact"),
];

pub const PRIMARY_CTA: NavLink = NavLink::leaf("Book a Demo", "/contact");

/// One row of the mobile panel; sub-links sit at depth 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileEntry {
    pub label: &'static str,
    pub href: &'static str,
    pub depth: u8,
}

pub fn mobile_entries() -> Vec<MobileEntry> {
    NAV_LINKS
        .iter()
        .flat_map(|link| {
            std::iter::once(MobileEntry {
                label: link.label,
                href: link.href,
                depth: 0,
            })
            .chain(link.children.iter().map(|child| MobileEntry {
                label: child.label,
                href: child.href,
                depth: 1,
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_panel_lists_sub_links_under_their_parent() {
        let entries = mobile_entries();
        assert_eq!(entries.len(), 10);
        let services = entries
            .iter()
            .position(|entry| entry.label == "Services")
            .expect("services entry");
        assert_eq!(entries[services].depth, 0);
        assert_eq!(entries[services + 1].href, "/services#products");
        assert_eq!(entries[services + 1].depth, 1);
        assert_eq!(entries[services + 2].href, "/services#custom");
        assert_eq!(entries[services + 3].label, "Products");
    }
}
