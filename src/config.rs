//! Configuration management.
//!
//! Settings are loaded from a TOML file, with defaults matching the fixed
//! parameters of the scraping contract (MAL base URLs, one page every two
//! seconds, CSV datasets under `data/`). A missing config file falls back to
//! the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::record::Category;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listing endpoint settings
    pub listing: ListingConfig,

    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Listing endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Base URL for anime genre listings
    pub anime_base_url: String,

    /// Base URL for manga genre listings
    pub manga_base_url: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per second (0.5 = one page every two seconds)
    pub requests_per_second: f64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the CSV datasets are written to
    pub dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path (relative to the output directory or absolute)
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing: ListingConfig {
                anime_base_url: "https://myanimelist.net/anime/genre".to_string(),
                manga_base_url: "https://myanimelist.net/manga/genre".to_string(),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: 0.5,
            },
            output: OutputConfig {
                dir: "data".to_string(),
            },
            logging: LoggingConfig {
                log_dir: "logs".to_string(),
                default_level: "info".to_string(),
                console: true,
                file: true,
                json_format: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the listing base URL for a category
    pub fn base_url(&self, category: Category) -> &str {
        match category {
            Category::Anime => &self.listing.anime_base_url,
            Category::Manga => &self.listing.manga_base_url,
        }
    }

    /// Get the output directory path
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.dir)
    }

    /// Get the CSV dataset path for a category
    pub fn dataset_path(&self, category: Category) -> PathBuf {
        self.output_dir()
            .join(format!("{}_data.csv", category.as_str()))
    }

    /// Get the absolute path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        let log_path = Path::new(&self.logging.log_dir);
        if log_path.is_absolute() {
            log_path.to_path_buf()
        } else {
            self.output_dir().join(log_path)
        }
    }
}
