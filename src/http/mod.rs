//! HTTP fetching for genre listing pages.
//!
//! This module provides a rate-limited page fetcher for the MAL listing
//! endpoints, plus the trait seam the orchestrator is driven through.

pub mod client;
pub mod rate_limiter;

pub use client::{FetchError, ListingClient, PageFetcher};
pub use rate_limiter::RateLimiter;
