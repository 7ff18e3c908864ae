use reqwest::Url;

/// A navigation target split into path, query pairs, and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    requested_path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parses `/path?query#fragment`. Input that does not parse as a
    /// relative reference is kept verbatim as the path so that the
    /// not-found page can still echo it.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let relative = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };

        let parsed = Url::parse("http://site.invalid/")
            .and_then(|base| base.join(&relative))
            .ok()
            .filter(|url| url.host_str() == Some("site.invalid"));

        match parsed {
            Some(url) => Self {
                path: normalize_path(url.path()),
                requested_path: url.path().to_string(),
                query: url
                    .query_pairs()
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect(),
                fragment: url
                    .fragment()
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_string),
            },
            None => Self {
                path: relative.clone(),
                requested_path: relative,
                query: Vec::new(),
                fragment: None,
            },
        }
    }

    /// Builds a location from the pieces an HTTP request exposes; browsers
    /// never send the fragment.
    pub fn from_request(path: &str, query: Option<&str>) -> Self {
        match query {
            Some(query) if !query.is_empty() => Self::parse(&format!("{path}?{query}")),
            _ => Self::parse(path),
        }
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.fragment = (!fragment.is_empty()).then_some(fragment);
        self
    }

    /// Normalized path used for route matching.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path as the visitor typed it, trailing slashes included.
    pub fn requested_path(&self) -> &str {
        &self.requested_path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
