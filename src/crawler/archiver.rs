//! Frontier consumption and archiving
//!
//! Consumes the candidate set in lexicographic order until the accepted-page
//! target is met or the set runs out. Each candidate is fetched once;
//! transport failures and classifier rejections discard it with no retry.
//! Accepted pages get the next dense sequence number and are persisted
//! immediately; the index is written once, after the loop.

use crate::config::CrawlerConfig;
use crate::crawler::classifier::is_text_page;
use crate::crawler::fetcher::fetch_page;
use crate::output::{ArchiveWriter, IndexRecord};
use crate::VestnikError;
use reqwest::Client;
use std::collections::BTreeSet;
use std::time::Duration;

/// Drives Fetcher + ContentClassifier over the candidate set
pub struct FrontierArchiver<'a> {
    client: &'a Client,
    writer: &'a ArchiveWriter,
    crawler: &'a CrawlerConfig,
}

impl<'a> FrontierArchiver<'a> {
    pub fn new(client: &'a Client, writer: &'a ArchiveWriter, crawler: &'a CrawlerConfig) -> Self {
        Self {
            client,
            writer,
            crawler,
        }
    }

    /// Fetches, classifies, and persists candidates until the minimum target
    /// is reached or the set is exhausted
    ///
    /// Exhaustion below the target is a degraded outcome, not an error; the
    /// caller sees it in the record count. Only persistence failures abort.
    pub async fn archive(
        &self,
        mut candidates: BTreeSet<String>,
    ) -> Result<Vec<IndexRecord>, VestnikError> {
        let target = self.crawler.min_pages as usize;
        let mut records: Vec<IndexRecord> = Vec::new();

        while records.len() < target {
            let Some(url) = candidates.pop_first() else {
                tracing::warn!(
                    "Candidate set exhausted with {} of {} pages saved",
                    records.len(),
                    target
                );
                break;
            };

            tracing::info!("Downloading ({}/{}): {}", records.len() + 1, target, url);

            let Some(html) = fetch_page(self.client, &url).await else {
                continue;
            };

            if !is_text_page(&html) {
                tracing::debug!("Skipped: not a text page: {}", url);
                continue;
            }

            let sequence = records.len() as u32 + 1;
            let filename = self.writer.save_page(sequence, &html)?;
            records.push(IndexRecord { sequence, url });
            tracing::info!("Saved: {}", filename);

            tokio::time::sleep(Duration::from_millis(self.crawler.request_delay_ms)).await;
        }

        self.writer.write_index(&records)?;
        tracing::info!(
            "Index file created: {}",
            self.writer.index_path().display()
        );

        Ok(records)
    }
}
