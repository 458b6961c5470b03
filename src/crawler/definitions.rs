//! Definition lookup for a single entry title

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::EntryListParser;
use crate::model::{Definition, EntryTitle};
use crate::url::UrlBuilder;
use crate::ScrapeError;

/// Fetches and extracts the definitions listed on a term page
///
/// Uses its own parser configured with definition-page markers; it shares no
/// state with the browse-page parser.
pub struct DefinitionFetcher<'a, F: ?Sized> {
    urls: &'a UrlBuilder,
    fetcher: &'a F,
    parser: &'a EntryListParser,
}

impl<'a, F: PageFetcher + ?Sized> DefinitionFetcher<'a, F> {
    pub fn new(urls: &'a UrlBuilder, fetcher: &'a F, parser: &'a EntryListParser) -> Self {
        Self {
            urls,
            fetcher,
            parser,
        }
    }

    /// Returns the definitions for `title` in page order
    ///
    /// A term page without definitions, or one whose definition lines cannot
    /// be parsed, yields an empty list.
    ///
    /// # Errors
    ///
    /// * `ScrapeError::Validation` - the title cannot form a term URL
    /// * `ScrapeError::Fetch` - the term page could not be fetched
    pub async fn definitions_for(
        &self,
        title: &EntryTitle,
    ) -> Result<Vec<Definition>, ScrapeError> {
        let url = self.urls.term_url(title)?;
        tracing::debug!("Fetching definitions for '{}' from {}", title, url);

        let lines = self.fetcher.fetch_lines(&url).await?;

        match self.parser.parse(&lines) {
            Ok(items) => {
                if items.is_empty() {
                    tracing::debug!("No definitions found for '{}'", title);
                }
                Ok(items.into_iter().map(Definition::from).collect())
            }
            Err(e) => {
                tracing::warn!("Unparseable definition page for '{}': {}", title, e);
                Ok(Vec::new())
            }
        }
    }
}
