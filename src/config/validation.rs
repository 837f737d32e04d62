use crate::config::types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url has no host: '{}'",
            config.base_url
        )));
    }

    if !config.listing_path.starts_with('/') || config.listing_path.trim_end_matches('/').len() < 2
    {
        return Err(ConfigError::Validation(format!(
            "listing_path must be a non-root absolute path, got '{}'",
            config.listing_path
        )));
    }

    Ok(())
}

/// Validates crawler bounds
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.min_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "min_pages must be >= 1, got {}",
            config.min_pages
        )));
    }

    if config.max_listing_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_listing_pages must be >= 1, got {}",
            config.max_listing_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output paths
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.index_file.is_empty() {
        return Err(ConfigError::Validation(
            "index_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            site: SiteConfig {
                base_url: "https://media.kpfu.ru".to_string(),
                listing_path: "/news".to_string(),
            },
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = create_test_config();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = create_test_config();
        config.site.base_url = "ftp://media.kpfu.ru".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_relative_listing_path() {
        let mut config = create_test_config();
        config.site.listing_path = "news".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_root_listing_path() {
        let mut config = create_test_config();
        config.site.listing_path = "/".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_min_pages() {
        let mut config = create_test_config();
        config.crawler.min_pages = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_max_listing_pages() {
        let mut config = create_test_config();
        config.crawler.max_listing_pages = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let mut config = create_test_config();
        config.crawler.request_delay_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_output_directory() {
        let mut config = create_test_config();
        config.output.directory = String::new();
        assert!(validate(&config).is_err());
    }
}
