//! Shared HTTP fetcher used by every site extractor.
//!
//! The contract is blunt: one GET per call, a fixed browser-ish user agent,
//! a 10-second timeout, and a body returned only when the status is exactly
//! 200. Any other status, any transport error and any timeout all degrade
//! identically into `None`, meaning "no jobs from this board". There is no
//! retry.
//!
//! The [`Fetch`] trait is the seam that lets extractor and aggregator tests
//! run against stub fetchers instead of the network.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request, matching what the boards expect from
/// a plain browser.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout. Nothing bounds a whole search beyond the sum of
/// these, one per board.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieve one URL, or signal failure.
pub trait Fetch {
    /// Return the response body, or `None` when the request fails or the
    /// status is anything but 200.
    async fn fetch(&self, url: &str) -> Option<String>;
}


/// The real fetcher, backed by a preconfigured [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.text().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        debug!(%url, error = %e, "Failed reading response body");
                        None
                    }
                }
            }
            Ok(response) => {
                debug!(%url, status = %response.status(), "Non-200 response");
                None
            }
            Err(e) => {
                debug!(%url, error = %e, "Request failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_contract_constants() {
        assert_eq!(USER_AGENT, "Mozilla/5.0");
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(10));
    }

    #[test]
    fn test_client_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
