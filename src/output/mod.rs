//! Output module for writing crawl results
//!
//! This module handles:
//! - Formatting entries as `title:::definition:::...` lines
//! - Creating and writing the output file
//! - Reporting crawl statistics

pub mod stats;
mod writer;

pub use stats::{format_duration, print_summary};
pub use writer::{create_output, format_entry, write_entries, DEFINITION_SEPARATOR};
