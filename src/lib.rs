//! MAL genre listing scraper.
//!
//! Fetches paginated genre listings from MyAnimeList for the anime and manga
//! categories, extracts title/genres/description per listing entry, and
//! writes one flat CSV dataset per category.

pub mod config;
pub mod export;
pub mod extract;
pub mod http;
pub mod logging;
pub mod record;
pub mod scraper;

pub use config::Config;
pub use extract::{Extractor, PageEntry};
pub use http::{FetchError, ListingClient, PageFetcher};
pub use record::{Category, GenreRecord};
pub use scraper::{CatalogScraper, ScrapeStats, GENRE_IDS};
