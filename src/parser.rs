//! Splits a raw text blob into named file segments.
//!
//! The wire format is one delimiter line per file: a line starting with the
//! literal `### File:` whose file name sits between the first and second
//! backtick on that line, e.g. `### File: \`src/main.py\``. Everything up to
//! the next delimiter (or end of input) is that file's content.

use log::debug;

use crate::error::{Error, Result};

/// Literal prefix that marks the start of a new file segment.
pub const DELIMITER_PREFIX: &str = "### File:";

/// A single parsed (name, content) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub content: String,
}

/// Insertion-ordered set of parsed files with unique names.
///
/// Re-inserting an existing name replaces its content in place, so the entry
/// keeps its original position. Order only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<FileEntry>,
}

impl FileSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Content of the named file, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.content.as_str())
    }

    /// File names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Insert a pair, overwriting the content of an existing name in place.
    fn insert(&mut self, name: String, content: String) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.content = content,
            None => self.entries.push(FileEntry { name, content }),
        }
    }
}

/// Parse a raw blob into a [`FileSet`].
///
/// Lines are split with [`str::lines`], so CRLF endings are normalized to LF
/// in the stored content. Text before the first delimiter is discarded, and
/// input without any delimiter yields an empty set. An empty backtick-quoted
/// name is accepted and stored under the empty string.
pub fn parse(raw: &str) -> Result<FileSet> {
    let mut files = FileSet::default();
    let mut current_name: Option<String> = None;
    let mut current_content = String::new();

    for (idx, line) in raw.lines().enumerate() {
        if line.starts_with(DELIMITER_PREFIX) {
            if let Some(name) = current_name.take() {
                files.insert(name, std::mem::take(&mut current_content));
            }
            current_content.clear();
            let name = delimiter_name(line)
                .ok_or(Error::MalformedDelimiter { line: idx + 1 })?;
            current_name = Some(name.to_string());
        } else if current_name.is_some() {
            current_content.push_str(line);
            current_content.push('\n');
        }
    }

    if let Some(name) = current_name {
        files.insert(name, current_content);
    }

    debug!("parsed {} file segment(s)", files.len());
    Ok(files)
}

/// Text strictly between the first and second backtick of a delimiter line.
fn delimiter_name(line: &str) -> Option<&str> {
    let rest = line.split_once('`')?.1;
    Some(rest.split_once('`')?.0)
}
