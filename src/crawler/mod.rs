//! Crawler module for Vestnik
//!
//! This module contains the crawl pipeline:
//! - HTTP fetching with browser-like headers
//! - Article link extraction from listing pages
//! - Pagination traversal of the news listing
//! - Text-page classification
//! - Frontier consumption into the numbered archive

mod archiver;
mod classifier;
mod fetcher;
mod links;
mod walker;

pub use archiver::FrontierArchiver;
pub use classifier::is_text_page;
pub use fetcher::{build_http_client, fetch_page};
pub use links::LinkExtractor;
pub use walker::PaginationWalker;

use crate::config::Config;
use crate::output::ArchiveWriter;
use crate::VestnikError;

/// Runs a complete crawl: discovery, then archiving
///
/// Pagination runs to completion first; the resulting candidate set is then
/// consumed by the archiver. Control flow is strictly sequential and every
/// request is awaited before the next is issued.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(usize)` - Number of pages actually saved (may be below the
///   configured minimum if the site ran out of candidates)
/// * `Err(VestnikError)` - Client construction or persistence failed
pub async fn crawl(config: Config) -> Result<usize, VestnikError> {
    let client = build_http_client(&config.crawler)?;
    let extractor = LinkExtractor::new(&config.site)?;

    let walker = PaginationWalker::new(&client, &extractor, &config);
    let candidates = walker.discover().await;
    tracing::info!("Collected {} unique article URLs", candidates.len());

    let writer = ArchiveWriter::new(&config.output)?;
    let archiver = FrontierArchiver::new(&client, &writer, &config.crawler);
    let records = archiver.archive(candidates).await?;

    Ok(records.len())
}
