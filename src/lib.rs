//! Urban-Scrape: a dictionary browse-index crawler
//!
//! This crate walks the paginated browse index of a dictionary-style website
//! one letter and one page at a time, extracts entry titles from the returned
//! markup, optionally fetches each title's definitions, and collects the
//! results in order.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Urban-Scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed entry: {0}")]
    MalformedEntry(#[from] MalformedEntryError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Rejected input to the URL builder or the model constructors
///
/// Raised before any network access and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Letter must be in A-Z, got {0:?}")]
    Letter(char),

    #[error("Page number must be non-negative, got {0}")]
    PageNumber(i64),

    #[error("Entry title cannot be empty")]
    EmptyTitle,

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),

    #[error("Failed to build URL: {0}")]
    Url(String),
}

/// Transport-level failure while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

/// An entry line without the expected before/after markers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line is missing the {marker:?} marker: {line}")]
pub struct MalformedEntryError {
    /// The offending line
    pub line: String,

    /// The marker that could not be located
    pub marker: String,
}

/// Result type alias for Urban-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{CrawlController, HttpFetcher, PageFetcher};
pub use crate::model::{
    CrawlResult, Definition, Entry, EntryTitle, Letter, LetterStats, PageNumber, PageOutcome,
};
pub use crate::url::UrlBuilder;
