//! Vestnik: a bounded single-site news archiver
//!
//! This crate implements a crawler that walks the paginated news listing of a
//! single site, filters discovered pages down to substantive text articles,
//! and persists them as a sequentially numbered archive with a URL index.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Vestnik operations
#[derive(Debug, Error)]
pub enum VestnikError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Vestnik operations
pub type Result<T> = std::result::Result<T, VestnikError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::crawl;
pub use output::{ArchiveWriter, IndexRecord};
