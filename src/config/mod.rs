//! Configuration handling for Vestnik
//!
//! Configuration is a TOML file naming the target site, crawl bounds, and
//! output locations. Every tunable has a default matching the archiver's
//! stock deployment, so a minimal config only needs a `[site]` table.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
pub use validation::validate;
