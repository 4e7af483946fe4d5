//! Fixed-interval request gate.
//!
//! Paces outbound requests so consecutive page fetches are spaced at least
//! one interval apart, as a courtesy to the remote server.

use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum spacing between requests
    min_interval: Duration,
    /// Last request timestamp
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Create a gate allowing at most `max_per_second` requests per second.
    ///
    /// A non-positive rate disables pacing entirely.
    pub fn new(max_per_second: f64) -> Self {
        let min_interval = if max_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / max_per_second)
        } else {
            Duration::ZERO
        };

        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Wait until the next request is allowed, then record it.
    pub async fn acquire(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!(
                    wait_ms = wait_time.as_millis(),
                    "Rate limit: waiting before next request"
                );
                sleep(wait_time).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}
