//! Page fetching
//!
//! This module defines the [`PageFetcher`] seam used by the crawler and its
//! HTTP implementation:
//! - Building an HTTP client with a proper user agent string and timeouts
//! - GET requests returning the response body split into lines
//! - Error classification (timeout, non-success status, transport)
//!
//! Fetchers never retry; a failed fetch is reported to the caller once.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Source of page text for the crawler
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the body as lines, without line terminators
    async fn fetch_lines(&self, url: &Url) -> Result<Vec<String>, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch_lines(&self, url: &Url) -> Result<Vec<String>, FetchError> {
        (**self).fetch_lines(url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings holding the request timeouts
///
/// # Example
///
/// ```no_run
/// use urban_scrape::config::Config;
/// use urban_scrape::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.user_agent, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with a client configured from the crawler settings
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        build_http_client(user_agent, crawler).map(Self::new)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_lines(&self, url: &Url) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| classify_error(url, e))?;

        Ok(split_lines(&body))
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Splits a body into lines, dropping `\n` and `\r\n` terminators
pub fn split_lines(body: &str) -> Vec<String> {
    body.lines().map(str::to_string).collect()
}
