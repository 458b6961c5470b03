//! Dictionary entries: headwords and their definitions

use std::fmt;

/// A decoded dictionary headword
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryTitle(String);

impl EntryTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryTitle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A decoded definition belonging to one entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition(String);

impl Definition {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Definition {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One headword plus its definitions, in extraction order
///
/// An empty definition list is valid. Whether definitions were requested at
/// all is tracked on [`CrawlResult`](super::CrawlResult), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: EntryTitle,
    pub definitions: Vec<Definition>,
}

impl Entry {
    /// Creates an entry without definitions
    pub fn new(title: EntryTitle) -> Self {
        Self {
            title,
            definitions: Vec::new(),
        }
    }

    /// Creates an entry with the given definitions
    pub fn with_definitions(title: EntryTitle, definitions: Vec<Definition>) -> Self {
        Self { title, definitions }
    }
}
