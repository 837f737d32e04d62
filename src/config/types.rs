use serde::Deserialize;

/// Main configuration structure for Vestnik
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin the crawl is scoped to (scheme + host)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the news listing under the base URL; doubles as the
    /// article-namespace prefix a URL must carry to count as an article
    #[serde(rename = "listing-path", default = "default_listing_path")]
    pub listing_path: String,
}

impl SiteConfig {
    /// Absolute URL of the (unpaginated) listing page
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.listing_path)
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Minimum number of accepted pages before the frontier loop stops
    #[serde(rename = "min-pages")]
    pub min_pages: u32,

    /// Upper bound on paginated listing pages to attempt
    #[serde(rename = "max-listing-pages")]
    pub max_listing_pages: u32,

    /// Delay between successive requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            min_pages: 100,
            max_listing_pages: 30,
            request_delay_ms: 500,
            request_timeout_secs: 30,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding one file per accepted page
    pub directory: String,

    /// Path of the tab-separated index file
    #[serde(rename = "index-file")]
    pub index_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "crawl_output".to_string(),
            index_file: "index.txt".to_string(),
        }
    }
}

fn default_listing_path() -> String {
    "/news".to_string()
}
