//! Word list output
//!
//! One line per entry. When definitions were requested, each definition is
//! appended after a `:::` separator, in extraction order.

use crate::model::{CrawlResult, Entry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Separator placed before each definition on an output line
pub const DEFINITION_SEPARATOR: &str = ":::";

/// Formats one entry as an output line, without the trailing newline
pub fn format_entry(entry: &Entry, include_definitions: bool) -> String {
    let mut line = entry.title.to_string();
    if include_definitions {
        for definition in &entry.definitions {
            line.push_str(DEFINITION_SEPARATOR);
            line.push_str(definition.as_str());
        }
    }
    line
}

/// Writes every entry of `result`, one per line
///
/// Returns the number of lines written.
pub fn write_entries<W: Write>(writer: &mut W, result: &CrawlResult) -> io::Result<usize> {
    for entry in &result.entries {
        writeln!(writer, "{}", format_entry(entry, result.definitions_requested))?;
    }
    writer.flush()?;
    Ok(result.entries.len())
}

/// Creates (or truncates) the output file
///
/// Called before the crawl starts so that an unusable path fails fast.
pub fn create_output(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}
