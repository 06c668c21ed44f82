//! Core domain types - no I/O dependencies

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A single marker comment extracted from a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Path of the file the comment was found in
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    /// Marker type, upper-cased (`TODO`, `FIXME`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Comment text after the marker, trimmed
    pub text: String,
    /// Author from the optional `marker(author):` form, empty if absent
    pub author: String,
}

/// Field to order scan results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    File,
    Line,
    Type,
    Text,
    Author,
}

/// A sort key with direction, parsed from `key` or `key:desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub descending: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort key `{0}` (expected file, line, type, text or author)")]
pub struct ParseSortError(String);

impl FromStr for SortSpec {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, descending) = match s.strip_suffix(":desc") {
            Some(key) => (key, true),
            None => (s, false),
        };

        let key = match key {
            "file" => SortKey::File,
            "line" => SortKey::Line,
            "type" => SortKey::Type,
            "text" => SortKey::Text,
            "author" => SortKey::Author,
            other => return Err(ParseSortError(other.to_string())),
        };

        Ok(Self { key, descending })
    }
}

/// Stable sort, so comments from the same file keep their line order when
/// sorting by a key that ties.
pub fn sort_comments(comments: &mut [Comment], spec: SortSpec) {
    comments.sort_by(|a, b| {
        let ordering = match spec.key {
            SortKey::File => a.file.cmp(&b.file),
            SortKey::Line => a.line.cmp(&b.line),
            SortKey::Type => a.kind.cmp(&b.kind),
            SortKey::Text => a.text.cmp(&b.text),
            SortKey::Author => a.author.cmp(&b.author),
        };
        if spec.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
