//! Vestnik main entry point
//!
//! Command-line interface for the Vestnik news archiver.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vestnik::config::load_config;
use vestnik::crawler::crawl;

/// Vestnik: a bounded single-site news archiver
///
/// Vestnik walks one news site's paginated listing, downloads candidate
/// articles, keeps the ones that look like substantive text pages, and
/// writes them to a numbered archive with a URL index.
#[derive(Parser, Debug)]
#[command(name = "vestnik")]
#[command(version = "1.0.0")]
#[command(about = "A bounded single-site news archiver", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!("Target: {}", config.site.listing_url());
    tracing::info!("Output directory: {}", config.output.directory);
    tracing::info!("Minimum pages to download: {}", config.crawler.min_pages);

    let saved = crawl(config).await?;
    println!("Pages saved: {}", saved);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("vestnik=info,warn"),
            1 => EnvFilter::new("vestnik=debug,info"),
            2 => EnvFilter::new("vestnik=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &vestnik::Config) {
    println!("=== Vestnik Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listing: {}", config.site.listing_url());

    println!("\nCrawler:");
    println!("  Minimum pages: {}", config.crawler.min_pages);
    println!("  Max listing pages: {}", config.crawler.max_listing_pages);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  Index file: {}", config.output.index_file);

    println!("\n✓ Configuration is valid");
}
