//! Pagination traversal over the news listing
//!
//! Walks the unpaginated listing page and then `?page=1..=N`, merging
//! extracted article links into one candidate set. Pagination ends at the
//! page bound, on a fetch failure, or on the first page yielding no article
//! links (end of pagination, not an error).

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::fetch_page;
use crate::crawler::links::LinkExtractor;
use reqwest::Client;
use std::collections::BTreeSet;
use std::time::Duration;

/// Drives Fetcher + LinkExtractor across the listing pages
pub struct PaginationWalker<'a> {
    client: &'a Client,
    extractor: &'a LinkExtractor,
    crawler: &'a CrawlerConfig,
    listing_url: String,
}

impl<'a> PaginationWalker<'a> {
    pub fn new(client: &'a Client, extractor: &'a LinkExtractor, config: &'a Config) -> Self {
        Self {
            client,
            extractor,
            crawler: &config.crawler,
            listing_url: config.site.listing_url(),
        }
    }

    /// Collects the candidate article URL set from the whole listing
    pub async fn discover(&self) -> BTreeSet<String> {
        let mut candidates = BTreeSet::new();

        tracing::info!("Fetching main news page: {}", self.listing_url);
        if let Some(html) = fetch_page(self.client, &self.listing_url).await {
            let links = self.extractor.extract(&html);
            tracing::info!("Found {} article URLs", links.len());
            candidates.extend(links);
        }

        for page_num in 1..=self.crawler.max_listing_pages {
            let paginated_url = format!("{}?page={}", self.listing_url, page_num);
            tracing::info!("Fetching page {}: {}", page_num, paginated_url);

            let Some(html) = fetch_page(self.client, &paginated_url).await else {
                tracing::info!("Failed to fetch, stopping pagination");
                break;
            };

            let links = self.extractor.extract(&html);
            if links.is_empty() {
                tracing::info!("No more articles found, stopping pagination");
                break;
            }

            candidates.extend(links);
            tracing::info!("Total article URLs so far: {}", candidates.len());

            tokio::time::sleep(Duration::from_millis(self.crawler.request_delay_ms)).await;
        }

        candidates
    }
}
