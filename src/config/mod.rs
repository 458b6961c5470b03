//! Configuration module for Urban-Scrape
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: [`Config::default`] targets
//! `www.urbandictionary.com` with its known page markers.
//!
//! # Example
//!
//! ```no_run
//! use urban_scrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("urban-scrape.toml")).unwrap();
//! println!("Crawling {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
