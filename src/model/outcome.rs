/// Per-page outcomes and whole-run results
use super::{Entry, Letter};
use crate::ScrapeError;
use std::time::Duration;

/// The result of fetching and parsing one browse page
#[derive(Debug)]
pub enum PageOutcome {
    /// The page listed at least one entry
    Entries(Vec<Entry>),

    /// The page was fetched and parsed but listed nothing
    Empty,

    /// The page could not be fetched or parsed
    Failed(ScrapeError),
}

impl PageOutcome {
    /// Builds an outcome from parsed entries, mapping an empty list to `Empty`
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Self::Empty
        } else {
            Self::Entries(entries)
        }
    }

    /// Returns true if the page failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<ScrapeError> for PageOutcome {
    fn from(error: ScrapeError) -> Self {
        Self::Failed(error)
    }
}

/// Counters and timing for one letter of the crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    pub letter: Letter,

    /// Pages that contributed at least one entry
    pub pages_scraped: u32,

    /// Pages that failed to fetch or parse
    pub pages_failed: u32,

    /// Entries collected for this letter
    pub entries_added: usize,

    /// Wall-clock time spent on this letter
    pub elapsed: Duration,
}

impl LetterStats {
    pub fn new(letter: Letter) -> Self {
        Self {
            letter,
            pages_scraped: 0,
            pages_failed: 0,
            entries_added: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Everything a crawl produced, in letter then page order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    /// All entries, A to Z, page order within each letter
    pub entries: Vec<Entry>,

    /// One record per crawled letter, in crawl order
    pub letters: Vec<LetterStats>,

    /// Whether definitions were requested for this run
    pub definitions_requested: bool,
}

impl CrawlResult {
    pub fn new(definitions_requested: bool) -> Self {
        Self {
            entries: Vec::new(),
            letters: Vec::new(),
            definitions_requested,
        }
    }

    pub fn total_pages_scraped(&self) -> u64 {
        self.letters.iter().map(|s| u64::from(s.pages_scraped)).sum()
    }

    pub fn total_pages_failed(&self) -> u64 {
        self.letters.iter().map(|s| u64::from(s.pages_failed)).sum()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.letters.iter().map(|s| s.elapsed).sum()
    }
}
