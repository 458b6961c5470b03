//! Crawl statistics reporting
//!
//! This module provides functionality for formatting and displaying the
//! per-letter counters collected during a crawl.

use crate::model::CrawlResult;
use std::time::Duration;

/// Formats a duration as `Hh:Mm:Ss`
///
/// Hours are not wrapped, so long crawls show e.g. `27h:3m:0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{}h:{}m:{}s", hours, minutes, seconds)
}

/// Prints crawl statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `result` - The crawl result to summarise
pub fn print_summary(result: &CrawlResult) {
    println!("=== Scrape Statistics ===\n");

    println!("Letters:");
    println!(
        "  {:<6} {:>8} {:>8} {:>10} {:>12}",
        "Letter", "Scraped", "Failed", "Words", "Clock time"
    );
    for stats in &result.letters {
        println!(
            "  {:<6} {:>8} {:>8} {:>10} {:>12}",
            stats.letter.to_string(),
            stats.pages_scraped,
            stats.pages_failed,
            stats.entries_added,
            format_duration(stats.elapsed)
        );
    }
    println!();

    println!("Overview:");
    println!("  Total words: {}", result.entries.len());
    println!("  Pages scraped: {}", result.total_pages_scraped());
    println!("  Pages failed: {}", result.total_pages_failed());
    println!(
        "  Definitions requested: {}",
        if result.definitions_requested {
            "yes"
        } else {
            "no"
        }
    );
    println!(
        "  Total clock time: {}",
        format_duration(result.total_elapsed())
    );

    let attempted = result.total_pages_scraped() + result.total_pages_failed();
    if attempted > 0 {
        let success_rate = result.total_pages_scraped() as f64 / attempted as f64 * 100.0;
        println!(
            "  Success rate: {:.1}% ({} / {} pages)",
            success_rate,
            result.total_pages_scraped(),
            attempted
        );
    }
}
