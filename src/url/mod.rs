//! Request URL construction for Urban-Scrape
//!
//! This module builds and validates the two kinds of request URL the crawler
//! issues: browse index pages (`browse.php`) and single term pages
//! (`define.php`).

mod builder;

pub use builder::{escape_term, UrlBuilder};
