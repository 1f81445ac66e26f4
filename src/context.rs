use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::error::JobError;

/// Optional scheme and `www.` prefix followed by dot-separated labels
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(http://www\.|https://www\.|http://|https://)?([a-z0-9]+\.)*[a-z0-9]+\.[a-z]+")
        .expect("DOMAIN_PATTERN regex")
});

/// Read-only facts about the requested page, derived once per job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// URL as requested (scheme always present)
    pub url: String,

    /// Matched domain prefix, e.g. `https://www.example.com`
    pub domain: String,

    /// `https://` or `http://`, following the page's own scheme
    pub protocol: &'static str,

    /// Path component of the URL, e.g. `/blog/post`
    pub path: String,
}

impl PageContext {
    /// Derive the context for a scheme-qualified page URL
    pub fn new(url: &str) -> Result<Self, JobError> {
        let domain = DOMAIN_PATTERN
            .find(url)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| JobError::InvalidUrl(url.to_string()))?;

        let parsed = Url::parse(url).map_err(|e| {
            ::log::debug!("Url::parse rejected {}: {}", url, e);
            JobError::InvalidUrl(url.to_string())
        })?;

        let protocol = if url.starts_with("https://") {
            "https://"
        } else {
            "http://"
        };

        Ok(Self {
            url: url.to_string(),
            domain,
            protocol,
            path: parsed.path().to_string(),
        })
    }

    /// Resolve an image reference found on this page
    pub fn resolve(&self, reference: &str) -> String {
        crate::resolve::resolve(reference, &self.domain, self.protocol)
    }
}

/// Prepend `https://` to URLs that arrive without a scheme
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}
