//! Crawl controller - letter and page loop orchestration
//!
//! This module contains the main crawl loop. For each letter it requests
//! browse pages in order until either:
//! - a page is fetched and parsed successfully but lists no entries
//!   (the end of that letter), or
//! - the per-letter page budget is used up.
//!
//! Failed pages are counted and skipped; they never end a letter or the run.

use crate::config::Config;
use crate::crawler::definitions::DefinitionFetcher;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::EntryListParser;
use crate::model::{CrawlResult, Entry, EntryTitle, Letter, LetterStats, PageOutcome};
use crate::output::format_duration;
use crate::url::UrlBuilder;
use crate::ScrapeError;
use std::time::Instant;

/// What the page loop does after a page outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Request the next page of the same letter
    NextPage,

    /// Stop requesting pages for this letter
    EndOfLetter,
}

/// Termination policy for the page loop
///
/// Only an empty successful page ends a letter. Failures move on to the next
/// page so that a run of errors merely exhausts the page budget.
pub fn page_action(outcome: &PageOutcome) -> PageAction {
    match outcome {
        PageOutcome::Entries(_) | PageOutcome::Failed(_) => PageAction::NextPage,
        PageOutcome::Empty => PageAction::EndOfLetter,
    }
}

/// Sequential crawler over the browse index
pub struct CrawlController<F> {
    urls: UrlBuilder,
    fetcher: F,
    browse_parser: EntryListParser,
    definition_parser: EntryListParser,
    first_letter: Letter,
    last_letter: Letter,
    max_pages_per_letter: u32,
}

impl<F: PageFetcher> CrawlController<F> {
    /// Creates a controller from a validated configuration
    ///
    /// # Errors
    ///
    /// * `ScrapeError::Validation` - bad base URL or letter bounds
    pub fn new(config: &Config, fetcher: F) -> Result<Self, ScrapeError> {
        Ok(Self {
            urls: UrlBuilder::new(&config.site.base_url)?,
            fetcher,
            browse_parser: EntryListParser::new(config.browse_markers.clone()),
            definition_parser: EntryListParser::new(config.definition_markers.clone()),
            first_letter: Letter::new(config.crawler.first_letter)?,
            last_letter: Letter::new(config.crawler.last_letter)?,
            max_pages_per_letter: config.crawler.max_pages_per_letter,
        })
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Runs the whole crawl
    ///
    /// Walks every configured letter in order and returns all entries with
    /// per-letter statistics. Page-level failures are logged and counted;
    /// nothing short of process termination stops the run early.
    pub async fn crawl(&self, want_definitions: bool) -> CrawlResult {
        tracing::info!(
            "Starting scrape of {} (letters {}-{}, up to {} pages each, definitions: {})",
            self.urls.base(),
            self.first_letter,
            self.last_letter,
            self.max_pages_per_letter,
            want_definitions
        );

        let mut result = CrawlResult::new(want_definitions);
        let start_time = Instant::now();

        for letter in Letter::range(self.first_letter, self.last_letter) {
            let stats = self
                .crawl_letter(letter, want_definitions, &mut result.entries)
                .await;

            tracing::info!(
                "Ending letter {} (scraped pages: {}  failed pages: {}  words: {}  clock time: {})",
                letter,
                stats.pages_scraped,
                stats.pages_failed,
                stats.entries_added,
                format_duration(stats.elapsed)
            );

            result.letters.push(stats);
        }

        tracing::info!(
            "Scrape finished: {} entries, {} pages scraped, {} pages failed in {}",
            result.entries.len(),
            result.total_pages_scraped(),
            result.total_pages_failed(),
            format_duration(start_time.elapsed())
        );

        result
    }

    /// Crawls the pages of one letter, appending entries in page order
    async fn crawl_letter(
        &self,
        letter: Letter,
        want_definitions: bool,
        entries: &mut Vec<Entry>,
    ) -> LetterStats {
        tracing::info!("Starting letter {}", letter);

        let mut stats = LetterStats::new(letter);
        let start_time = Instant::now();

        for page in 1..=self.max_pages_per_letter {
            let outcome = self.scrape_page(letter, page).await;
            let action = page_action(&outcome);

            match outcome {
                PageOutcome::Entries(mut page_entries) => {
                    if want_definitions {
                        self.attach_definitions(&mut page_entries).await;
                    }
                    tracing::debug!(
                        "Letter {} page {}: {} entries",
                        letter,
                        page,
                        page_entries.len()
                    );
                    stats.pages_scraped += 1;
                    stats.entries_added += page_entries.len();
                    entries.extend(page_entries);
                }
                PageOutcome::Empty => {
                    tracing::debug!("Letter {} page {}: no entries, letter done", letter, page);
                }
                PageOutcome::Failed(e) => {
                    tracing::warn!(
                        "Unable to scrape letter {} page {}: {}. Continuing to other pages.",
                        letter,
                        page,
                        e
                    );
                    stats.pages_failed += 1;
                }
            }

            if action == PageAction::EndOfLetter {
                break;
            }
        }

        stats.elapsed = start_time.elapsed();
        stats
    }

    /// Fetches and parses one browse page
    ///
    /// Never returns an error: every failure becomes `PageOutcome::Failed`.
    pub async fn scrape_page(&self, letter: Letter, page: u32) -> PageOutcome {
        match self.try_scrape_page(letter, page).await {
            Ok(titles) => {
                PageOutcome::from_entries(titles.into_iter().map(Entry::new).collect())
            }
            Err(e) => PageOutcome::Failed(e),
        }
    }

    async fn try_scrape_page(
        &self,
        letter: Letter,
        page: u32,
    ) -> Result<Vec<EntryTitle>, ScrapeError> {
        let url = self.urls.browse_url(letter.as_char(), i64::from(page))?;
        tracing::trace!("GET {}", url);

        let lines = self.fetcher.fetch_lines(&url).await?;
        let items = self.browse_parser.parse(&lines)?;

        Ok(items.into_iter().map(EntryTitle::from).collect())
    }

    /// Fills in definitions for each entry
    ///
    /// An entry whose lookup fails keeps an empty definition list.
    async fn attach_definitions(&self, entries: &mut [Entry]) {
        let definitions =
            DefinitionFetcher::new(&self.urls, &self.fetcher, &self.definition_parser);

        for entry in entries.iter_mut() {
            match definitions.definitions_for(&entry.title).await {
                Ok(found) => entry.definitions = found,
                Err(e) => {
                    tracing::warn!("Unable to fetch definitions for '{}': {}", entry.title, e);
                }
            }
        }
    }
}
