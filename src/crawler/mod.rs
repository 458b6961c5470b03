//! Crawler module for browse index fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The page fetcher seam and its HTTP implementation
//! - Line-oriented list extraction
//! - Definition lookup for single terms
//! - The letter/page crawl loop and its termination policy

mod controller;
mod definitions;
mod fetcher;
mod parser;

pub use controller::{page_action, CrawlController, PageAction};
pub use definitions::DefinitionFetcher;
pub use fetcher::{build_http_client, split_lines, HttpFetcher, PageFetcher};
pub use parser::{EntryListParser, LineAction, ListMarkers, ScanState};

use crate::config::Config;
use crate::model::CrawlResult;
use crate::ScrapeError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Walk every configured letter, page by page
/// 3. Optionally look up definitions for each entry
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `want_definitions` - Whether to fetch each entry's term page
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed (individual pages may have failed)
/// * `Err(ScrapeError)` - The crawler could not be set up
pub async fn crawl(config: &Config, want_definitions: bool) -> Result<CrawlResult, ScrapeError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let controller = CrawlController::new(config, fetcher)?;
    Ok(controller.crawl(want_definitions).await)
}
