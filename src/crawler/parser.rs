//! Line-oriented list extraction
//!
//! Browse pages embed their entry list as one entry per line between two
//! marker lines, for example:
//!
//! ```text
//! <div id='columnist'>
//! <ul>
//! <li class=""><a href="/define.php?term=Aarhus">Aarhus</a></li>
//! <li class="popular"><a href="/define.php?term=aarping">aarping</a></li>
//! </ul>
//! </div>
//! ```
//!
//! The parser walks the lines once with a three-state machine
//! (`SeekingStart` -> `InList` -> `Done`). Marker comparison is exact: the
//! whole line, case-sensitive, untrimmed. A page whose markup deviates from
//! the markers simply yields no items.

use crate::MalformedEntryError;
use serde::Deserialize;

/// The marker lines and substrings delimiting one kind of list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListMarkers {
    /// Line that opens the list
    pub start_of_list: String,

    /// Line that closes the list
    pub end_of_list: String,

    /// Wrapper lines inside the list that carry no item
    #[serde(default)]
    pub extraneous: Vec<String>,

    /// Substring preceding the item text (last occurrence is used)
    pub before_item: String,

    /// Substring following the item text (first occurrence is used)
    pub after_item: String,
}

impl ListMarkers {
    /// Markers for the entry list of a browse index page
    pub fn browse_page() -> Self {
        Self {
            start_of_list: "<div id='columnist'>".to_string(),
            end_of_list: "</div>".to_string(),
            extraneous: vec!["<ul>".to_string(), "</ul>".to_string()],
            before_item: "\">".to_string(),
            after_item: "</a>".to_string(),
        }
    }

    /// Markers for the definition list of a term page
    pub fn definition_page() -> Self {
        Self {
            start_of_list: "<div class='definitions'>".to_string(),
            end_of_list: "</div>".to_string(),
            extraneous: vec!["<ol>".to_string(), "</ol>".to_string()],
            before_item: "<li>".to_string(),
            after_item: "</li>".to_string(),
        }
    }

    fn is_extraneous(&self, line: &str) -> bool {
        self.extraneous.iter().any(|token| token == line)
    }
}

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the start-of-list line
    SeekingStart,

    /// Between the start and end markers
    InList,

    /// End marker seen, remaining lines are ignored
    Done,
}

/// What the scanner does with a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Nothing to emit
    Ignore,

    /// Extract one item from the line
    Extract,
}

/// Single-pass list extractor configured by a set of [`ListMarkers`]
#[derive(Debug, Clone)]
pub struct EntryListParser {
    markers: ListMarkers,
}

impl EntryListParser {
    pub fn new(markers: ListMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &ListMarkers {
        &self.markers
    }

    /// The transition function of the scanner
    ///
    /// | State        | Line            | Next         | Action  |
    /// |--------------|-----------------|--------------|---------|
    /// | SeekingStart | start marker    | InList       | Ignore  |
    /// | SeekingStart | anything else   | SeekingStart | Ignore  |
    /// | InList       | end marker      | Done         | Ignore  |
    /// | InList       | extraneous      | InList       | Ignore  |
    /// | InList       | anything else   | InList       | Extract |
    /// | Done         | anything        | Done         | Ignore  |
    pub fn step(&self, state: ScanState, line: &str) -> (ScanState, LineAction) {
        match state {
            ScanState::SeekingStart if line == self.markers.start_of_list => {
                (ScanState::InList, LineAction::Ignore)
            }
            ScanState::SeekingStart => (ScanState::SeekingStart, LineAction::Ignore),
            ScanState::InList if line == self.markers.end_of_list => {
                (ScanState::Done, LineAction::Ignore)
            }
            ScanState::InList if self.markers.is_extraneous(line) => {
                (ScanState::InList, LineAction::Ignore)
            }
            ScanState::InList => (ScanState::InList, LineAction::Extract),
            ScanState::Done => (ScanState::Done, LineAction::Ignore),
        }
    }

    /// Extracts the ordered, entity-decoded items from a page's lines
    ///
    /// Returns an empty list when the start marker never appears. A list left
    /// open at end of input keeps the items collected so far.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntryError` for the first item line lacking either
    /// marker; the page is then treated as failed by the caller.
    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<String>, MalformedEntryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = Vec::new();
        let mut state = ScanState::SeekingStart;

        for line in lines {
            let line = line.as_ref();
            let (next, action) = self.step(state, line);
            if action == LineAction::Extract {
                items.push(self.extract_item(line)?);
            }
            state = next;
            if state == ScanState::Done {
                break;
            }
        }

        Ok(items)
    }

    /// Extracts the decoded item text from one item line
    ///
    /// The item is the text strictly between the end of the last
    /// before-marker and the start of the first after-marker.
    pub fn extract_item(&self, line: &str) -> Result<String, MalformedEntryError> {
        let before = &self.markers.before_item;
        let after = &self.markers.after_item;

        let start = line
            .rfind(before.as_str())
            .map(|index| index + before.len())
            .ok_or_else(|| malformed(line, before))?;

        let end = line
            .find(after.as_str())
            .filter(|&index| index >= start)
            .ok_or_else(|| malformed(line, after))?;

        Ok(html_escape::decode_html_entities(&line[start..end]).into_owned())
    }
}

fn malformed(line: &str, marker: &str) -> MalformedEntryError {
    MalformedEntryError {
        line: line.to_string(),
        marker: marker.to_string(),
    }
}
