use crate::crawler::ListMarkers;
use serde::Deserialize;

/// Main configuration structure for Urban-Scrape
///
/// Every table is optional; missing tables fall back to the values for
/// `www.urbandictionary.com`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(rename = "browse-markers", default = "ListMarkers::browse_page")]
    pub browse_markers: ListMarkers,
    #[serde(
        rename = "definition-markers",
        default = "ListMarkers::definition_page"
    )]
    pub definition_markers: ListMarkers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            browse_markers: ListMarkers::browse_page(),
            definition_markers: ListMarkers::definition_page(),
        }
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root URL the browse and define paths are appended to
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.urbandictionary.com".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Upper bound on browse pages requested for a single letter
    #[serde(rename = "max-pages-per-letter")]
    pub max_pages_per_letter: u32,

    /// First letter to crawl
    #[serde(rename = "first-letter")]
    pub first_letter: char,

    /// Last letter to crawl (inclusive)
    #[serde(rename = "last-letter")]
    pub last_letter: char,

    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages_per_letter: 5000,
            first_letter: 'A',
            last_letter: 'Z',
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header: `Name/Version` or
    /// `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match self.contact_url.as_deref().filter(|u| !u.is_empty()) {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}
