//! Scrape orchestration.
//!
//! Walks every genre id of each category, paginating until a page comes back
//! with no entries or a fetch fails, and writes one CSV dataset per category.

use anyhow::Result;
use std::ops::RangeInclusive;
use tracing::{info, warn};

use crate::config::Config;
use crate::export;
use crate::extract::Extractor;
use crate::http::PageFetcher;
use crate::record::{Category, GenreRecord};

/// Genre identifiers scraped for every category. Fixed contract of the
/// remote site's listing structure.
pub const GENRE_IDS: RangeInclusive<u32> = 1..=45;

/// Counters for one scrape run.
#[derive(Debug, Clone, Default)]
pub struct ScrapeStats {
    pub genres_processed: usize,
    pub pages_fetched: usize,
    pub records_extracted: usize,
    pub fetch_failures: usize,
}

/// Why pagination stopped for one genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    /// A page yielded zero entries
    Exhausted,
    /// A fetch failed; earlier pages are kept
    FetchFailed,
}

/// Main scrape coordinator
pub struct CatalogScraper<F> {
    fetcher: F,
    extractor: Extractor,
}

impl<F: PageFetcher> CatalogScraper<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: Extractor::new()?,
        })
    }

    /// Run the complete scrape: both categories, all genre ids, one CSV
    /// dataset per category.
    pub async fn run(&mut self, config: &Config) -> Result<ScrapeStats> {
        let mut stats = ScrapeStats::default();

        for category in Category::ALL {
            info!(category = category.as_str(), "Scraping category");

            let mut dataset: Vec<GenreRecord> = Vec::new();
            for genre_id in GENRE_IDS {
                let records = self
                    .scrape_genre(config.base_url(category), category, genre_id, &mut stats)
                    .await;
                stats.genres_processed += 1;
                dataset.extend(records);
            }

            let path = config.dataset_path(category);
            export::write_dataset(&path, &dataset)?;
            info!(
                category = category.as_str(),
                records = dataset.len(),
                path = %path.display(),
                "Category dataset saved"
            );
        }

        info!(
            genres_processed = stats.genres_processed,
            pages_fetched = stats.pages_fetched,
            records_extracted = stats.records_extracted,
            fetch_failures = stats.fetch_failures,
            "Scrape complete"
        );

        Ok(stats)
    }

    /// Paginate one genre id until the listing is exhausted or a fetch fails.
    ///
    /// A fetch failure is terminal for this genre id only; records from
    /// earlier pages are kept and the caller moves on to the next id.
    async fn scrape_genre(
        &mut self,
        base_url: &str,
        category: Category,
        genre_id: u32,
        stats: &mut ScrapeStats,
    ) -> Vec<GenreRecord> {
        let mut records = Vec::new();
        let mut page = 1;

        let reason = loop {
            let html = match self.fetcher.fetch_page(base_url, genre_id, page).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(
                        category = category.as_str(),
                        genre_id,
                        page,
                        error = %e,
                        "Fetch failed, stopping pagination for this genre"
                    );
                    stats.fetch_failures += 1;
                    break StopReason::FetchFailed;
                }
            };
            stats.pages_fetched += 1;

            let entries = self.extractor.parse_page(&html);
            if entries.is_empty() {
                break StopReason::Exhausted;
            }

            info!(
                category = category.as_str(),
                genre_id,
                page,
                entries = entries.len(),
                first_title = %entries[0].title,
                "Extracted listing entries"
            );

            stats.records_extracted += entries.len();
            records.extend(entries.into_iter().map(|e| e.into_record(category, genre_id)));
            page += 1;
        };

        info!(
            category = category.as_str(),
            genre_id,
            records = records.len(),
            reason = ?reason,
            "Genre pagination finished"
        );

        records
    }
}
