//! MAL genre scraper CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use mal_genre_scraper::logging::{self, LogConfig};
use mal_genre_scraper::{CatalogScraper, Config, ListingClient};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config
            .logging
            .default_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    };

    logging::init(LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    info!("MAL genre scraper starting");
    info!(config_file = %args.config.display(), "Loaded configuration");

    // Initialize the rate-limited page fetcher
    let client = ListingClient::new(config.rate_limit.requests_per_second)
        .context("Failed to create listing client")?;

    // Run the scrape
    let mut scraper = CatalogScraper::new(client).context("Failed to create scraper")?;
    let stats = scraper.run(&config).await.context("Scrape failed")?;

    // Display final statistics
    info!("=== Scrape Complete ===");
    info!("Genres processed: {}", stats.genres_processed);
    info!("Pages fetched: {}", stats.pages_fetched);
    info!("Records extracted: {}", stats.records_extracted);
    info!("Fetch failures: {}", stats.fetch_failures);

    info!("MAL genre scraper finished successfully");

    Ok(())
}
