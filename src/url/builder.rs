use crate::model::{EntryTitle, Letter, PageNumber};
use crate::ValidationError;
use url::Url;

const BROWSE_PATH: &str = "browse.php";
const BROWSE_CHARACTER_PARAM: &str = "character";
const BROWSE_PAGE_PARAM: &str = "page";
const DEFINE_PATH: &str = "define.php";
const DEFINE_TERM_PARAM: &str = "term";

/// Builds request URLs for browse index pages and term pages
///
/// All methods are pure functions of the base URL and their arguments.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
}

impl UrlBuilder {
    /// Creates a builder rooted at `base`
    ///
    /// The base must be an absolute `http` or `https` URL. A missing trailing
    /// slash is added so that the request paths are appended to, rather than
    /// replace, the last path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use urban_scrape::url::UrlBuilder;
    ///
    /// let urls = UrlBuilder::new("http://www.urbandictionary.com").unwrap();
    /// let url = urls.browse_url('A', 2).unwrap();
    /// assert_eq!(url.as_str(), "http://www.urbandictionary.com/browse.php?character=A&page=2");
    /// ```
    pub fn new(base: &str) -> Result<Self, ValidationError> {
        let mut base =
            Url::parse(base).map_err(|e| ValidationError::BaseUrl(format!("{}: {}", base, e)))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ValidationError::BaseUrl(format!(
                "unsupported scheme '{}'",
                base.scheme()
            )));
        }

        if base.cannot_be_a_base() {
            return Err(ValidationError::BaseUrl(base.to_string()));
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    /// Returns the normalized base URL
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Builds `<base>/browse.php?character=<letter>&page=<page>`
    ///
    /// Takes raw values because letters and pages usually come from loop
    /// counters; both are validated here before anything is built.
    ///
    /// # Errors
    ///
    /// * `ValidationError::Letter` - letter outside `A`-`Z`
    /// * `ValidationError::PageNumber` - negative page
    pub fn browse_url(&self, letter: char, page: i64) -> Result<Url, ValidationError> {
        let letter = Letter::new(letter)?;
        let page = PageNumber::new(page)?;

        let mut url = self.join(BROWSE_PATH)?;
        url.query_pairs_mut()
            .append_pair(BROWSE_CHARACTER_PARAM, &letter.to_string())
            .append_pair(BROWSE_PAGE_PARAM, &page.to_string());

        Ok(url)
    }

    /// Builds `<base>/define.php?term=<escaped title>`
    ///
    /// The title is HTML-escaped (`&`, `<`, `>`, `"`, `'`) and then
    /// form-encoded as the query value.
    ///
    /// # Errors
    ///
    /// * `ValidationError::EmptyTitle` - the title is empty
    pub fn term_url(&self, title: &EntryTitle) -> Result<Url, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let escaped = escape_term(title.as_str());

        let mut url = self.join(DEFINE_PATH)?;
        url.query_pairs_mut()
            .append_pair(DEFINE_TERM_PARAM, &escaped);

        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url, ValidationError> {
        self.base
            .join(path)
            .map_err(|e| ValidationError::Url(format!("{}{}: {}", self.base, path, e)))
    }
}

/// HTML-escapes a term for use in a term page request
///
/// Inverse of the entity decoding applied to extracted titles.
pub fn escape_term(term: &str) -> String {
    html_escape::encode_quoted_attribute(term).into_owned()
}
