use std::collections::HashSet;

use super::location::Location;
use super::page::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(&'static str),
    CatchAll,
}

impl RoutePattern {
    fn matches(self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(pattern) => pattern.eq_ignore_ascii_case(path),
            RoutePattern::CatchAll => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoutePattern::Exact(pattern) => pattern,
            RoutePattern::CatchAll => "*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: PageId,
}

impl RouteEntry {
    pub const fn exact(pattern: &'static str, page: PageId) -> Self {
        Self {
            pattern: RoutePattern::Exact(pattern),
            page,
        }
    }

    pub const fn catch_all(page: PageId) -> Self {
        Self {
            pattern: RoutePattern::CatchAll,
            page,
        }
    }
}

/// Outcome of resolving a location against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: PageId,
    pub location: Location,
}

impl RouteMatch {
    pub fn is_fallback(&self) -> bool {
        self.page == PageId::NotFound
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route pattern '{0}' is declared more than once")]
    DuplicatePattern(&'static str),
    #[error("catch-all route must be the last entry (found at position {position})")]
    CatchAllNotLast { position: usize },
    #[error("route table has no catch-all entry")]
    MissingCatchAll,
}

/// Ordered list of routes; the first matching entry wins and the catch-all
/// sits last so it never shadows a concrete path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        let last = entries.len().saturating_sub(1);

        for (position, entry) in entries.iter().enumerate() {
            match entry.pattern {
                RoutePattern::Exact(pattern) => {
                    if !seen.insert(pattern.to_ascii_lowercase()) {
                        return Err(RouteTableError::DuplicatePattern(pattern));
                    }
                }
                RoutePattern::CatchAll if position != last => {
                    return Err(RouteTableError::CatchAllNotLast { position });
                }
                RoutePattern::CatchAll => {}
            }
        }

        match entries.last() {
            Some(entry) if entry.pattern == RoutePattern::CatchAll => Ok(Self { entries }),
            _ => Err(RouteTableError::MissingCatchAll),
        }
    }

    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(vec![
            RouteEntry::exact("/", PageId::Home),
            RouteEntry::exact("/about", PageId::About),
            RouteEntry::exact("/services", PageId::Services),
            RouteEntry::exact("/products", PageId::Products),
            RouteEntry::exact("/projects", PageId::Projects),
            RouteEntry::exact("/careers", PageId::Careers),
            RouteEntry::exact("/contact", PageId::Contact),
            RouteEntry::exact("/products/vorn-hr", PageId::VornHr),
            RouteEntry::exact("/products/vorqard", PageId::VorQard),
            RouteEntry::catch_all(PageId::NotFound),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn resolve(&self, location: &Location) -> RouteMatch {
        let page = self
            .entries
            .iter()
            .find(|entry| entry.pattern.matches(location.path()))
            .map(|entry| entry.page)
            .unwrap_or(PageId::NotFound);

        if page == PageId::NotFound {
            tracing::warn!(
                path = location.requested_path(),
                "no route matched, rendering not-found page"
            );
        }

        RouteMatch {
            page,
            location: location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_concrete_page_is_reachable_by_its_path() {
        let table = RouteTable::standard().expect("standard table is valid");
        for page in PageId::ALL {
            if let Some(path) = page.path() {
                let matched = table.resolve(&Location::parse(path));
                assert_eq!(matched.page, page, "{path}");
            }
        }
    }

    #[test]
    fn unknown_and_near_miss_paths_fall_back() {
        let table = RouteTable::standard().expect("standard table is valid");
        for path in ["/products/vornhr-typo", "/careers/apply", "/nope"] {
            let matched = table.resolve(&Location::parse(path));
            assert!(matched.is_fallback(), "{path}");
            assert_eq!(matched.location.path(), path);
        }
    }

    #[test]
    fn paths_match_regardless_of_case() {
        let table = RouteTable::standard().expect("standard table is valid");
        for (path, page) in [
            ("/About", PageId::About),
            ("/ABOUT", PageId::About),
            ("/Products/VORN-HR", PageId::VornHr),
            ("/CAREERS/", PageId::Careers),
        ] {
            let matched = table.resolve(&Location::parse(path));
            assert_eq!(matched.page, page, "{path}");
            assert_eq!(matched.location.requested_path(), path);
        }
    }

    #[test]
    fn fragments_do_not_change_the_page() {
        let table = RouteTable::standard().expect("standard table is valid");
        let matched = table.resolve(&Location::parse("/services#custom"));
        assert_eq!(matched.page, PageId::Services);
        assert_eq!(matched.location.fragment(), Some("custom"));
    }

    #[test]
    fn rejects_catch_all_before_concrete_routes() {
        let result = RouteTable::new(vec![
            RouteEntry::exact("/", PageId::Home),
            RouteEntry::catch_all(PageId::NotFound),
            RouteEntry::exact("/about", PageId::About),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteTableError::CatchAllNotLast { position: 1 }
        );
    }

    #[test]
    fn rejects_duplicates_and_missing_fallback() {
        let duplicate = RouteTable::new(vec![
            RouteEntry::exact("/about", PageId::About),
            RouteEntry::exact("/about", PageId::Contact),
            RouteEntry::catch_all(PageId::NotFound),
        ]);
        assert_eq!(
            duplicate.unwrap_err(),
            RouteTableError::DuplicatePattern("/about")
        );

        let differs_in_case = RouteTable::new(vec![
            RouteEntry::exact("/about", PageId::About),
            RouteEntry::exact("/About", PageId::Contact),
            RouteEntry::catch_all(PageId::NotFound),
        ]);
        assert_eq!(
            differs_in_case.unwrap_err(),
            RouteTableError::DuplicatePattern("/About")
        );

        let missing = RouteTable::new(vec![RouteEntry::exact("/", PageId::Home)]);
        assert_eq!(missing.unwrap_err(), RouteTableError::MissingCatchAll);
    }
}
