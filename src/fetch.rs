//! Page fetching behind a trait so the pagination loop is testable without
//! a network.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

/// Outcome of one page-fetch attempt.
///
/// The loop treats everything but `Body` as a stop signal; the distinction
/// only feeds logging. A non-success status is indistinguishable from
/// running past the last page on these sites, so it maps to `EndOfData`.
#[derive(Debug, Clone)]
pub enum PageFetch {
    Body(String),
    EndOfData,
    TransportError(String),
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> PageFetch;
}

/// Real fetcher over a shared `reqwest` client. No headers, auth or cookies;
/// one plain GET per page.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> PageFetch {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    warn!(%url, %status, "non-success status, treating as end of data");
                    return PageFetch::EndOfData;
                }
                match response.text().await {
                    Ok(body) => PageFetch::Body(body),
                    Err(err) => PageFetch::TransportError(err.to_string()),
                }
            }
            Err(err) => PageFetch::TransportError(err.to_string()),
        }
    }
}
