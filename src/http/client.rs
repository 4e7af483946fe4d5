//! Listing page fetcher.
//!
//! One GET per page, rate limited. There is no retry: any HTTP error status
//! or transport failure is surfaced to the caller, which treats it as the
//! end of pagination for the genre being scraped.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::rate_limiter::RateLimiter;

/// Failure at the fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Source of raw listing pages, keyed by base URL, genre id and page number.
///
/// The orchestrator is generic over this so tests can drive the pagination
/// loop with scripted pages instead of the network.
#[async_trait]
pub trait PageFetcher {
    async fn fetch_page(
        &mut self,
        base_url: &str,
        genre_id: u32,
        page: u32,
    ) -> Result<String, FetchError>;
}

/// HTTP fetcher for MAL genre listing pages.
pub struct ListingClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl ListingClient {
    pub fn new(requests_per_second: f64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("mal-genre-scraper/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(requests_per_second),
        })
    }
}

/// Build the listing URL for one page of one genre.
pub fn page_url(base_url: &str, genre_id: u32, page: u32) -> String {
    format!("{}/{}?page={}", base_url, genre_id, page)
}

#[async_trait]
impl PageFetcher for ListingClient {
    async fn fetch_page(
        &mut self,
        base_url: &str,
        genre_id: u32,
        page: u32,
    ) -> Result<String, FetchError> {
        self.rate_limiter.acquire().await;

        let url = page_url(base_url, genre_id, page);
        debug!(url = %url, "Requesting listing page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        Ok(response.text().await?)
    }
}
