//! Article link extraction from listing pages
//!
//! This module turns raw listing-page HTML into the set of in-scope article
//! URLs. A hyperlink survives only if it resolves to the configured origin,
//! lives under the article namespace, and is not an asset, a feed, or the
//! listing page itself.

use crate::config::SiteConfig;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Path suffixes that mark a link as an asset or document, never an article
const BLOCKED_EXTENSIONS: &[&str] = &[
    ".js", ".css", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".pdf", ".doc", ".docx",
];

/// Extracts normalized, in-scope article URLs from listing-page HTML
pub struct LinkExtractor {
    base: Url,
    /// Lowercased article-namespace prefix without trailing slash, e.g. "/news"
    listing_path: String,
}

impl LinkExtractor {
    /// Creates an extractor scoped to the configured site
    pub fn new(site: &SiteConfig) -> Result<Self, url::ParseError> {
        let base = Url::parse(&site.base_url)?;
        let listing_path = site.listing_path.trim_end_matches('/').to_lowercase();

        Ok(Self { base, listing_path })
    }

    /// Returns every accepted article URL found in `html`
    ///
    /// Results are deduplicated by exact string equality and ordered
    /// lexicographically; applying this to the same input twice yields the
    /// same set.
    pub fn extract(&self, html: &str) -> BTreeSet<String> {
        let document = Html::parse_document(html);
        let mut links = BTreeSet::new();

        if let Ok(selector) = Selector::parse("a[href]") {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    if let Some(url) = self.accept(href) {
                        links.insert(url);
                    }
                }
            }
        }

        links
    }

    /// Resolves one href and applies the article filter chain
    ///
    /// Returns the absolute URL string if the link is an in-scope article,
    /// `None` otherwise.
    fn accept(&self, href: &str) -> Option<String> {
        let href = href.trim();

        if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
            return None;
        }

        let resolved = self.base.join(href).ok()?;

        // Same origin: identical scheme and host as the configured base
        if resolved.scheme() != self.base.scheme() || resolved.host_str() != self.base.host_str() {
            return None;
        }

        let path = resolved.path().to_lowercase();

        if BLOCKED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return None;
        }

        if path.contains("rss") {
            return None;
        }

        // The listing page itself is never an article
        if path == self.listing_path || path == format!("{}/", self.listing_path) {
            return None;
        }

        if !path.contains(&self.listing_path) {
            return None;
        }

        Some(resolved.to_string())
    }
}
