//! Data model for the crawl
//!
//! All values here are created fresh per page or request and are not mutated
//! once handed to another component.

mod entry;
mod letter;
mod outcome;

pub use entry::{Definition, Entry, EntryTitle};
pub use letter::{Letter, PageNumber};
pub use outcome::{CrawlResult, LetterStats, PageOutcome};
