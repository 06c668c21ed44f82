//! Marker-comment extraction
//!
//! Scans file content line by line for marker comments of the form
//! `TYPE: text` or `TYPE(author): text`, case-insensitively. The marker
//! types are configurable; the regex is compiled once per scan.

use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::types::Comment;

/// Errors from building a parser out of the configured marker types
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid marker types: {source}")]
    InvalidTypes {
        #[from]
        source: regex::Error,
    },
}

/// Compiled line matcher for the configured marker types
#[derive(Debug, Clone)]
pub struct MarkerParser {
    regex: Regex,
}

impl MarkerParser {
    /// Build a parser for the given marker types (e.g. `["TODO", "FIXME"]`)
    pub fn new(marker_types: &[String]) -> Result<Self, ParserError> {
        let alternation = marker_types.join("|");
        let regex = Regex::new(&format!(
            r"(?i)\s*({alternation})(?:\(([\w.-]+)\))?:\s*(.*)"
        ))?;
        Ok(Self { regex })
    }

    /// Extract all marker comments from file content.
    ///
    /// Content containing NUL bytes is taken to be binary and yields
    /// nothing.
    pub fn parse(&self, content: &str, path: &Path) -> Vec<Comment> {
        if content.contains('\0') {
            tracing::debug!("skipping binary content in {}", path.display());
            return Vec::new();
        }

        let mut comments = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if let Some(caps) = self.regex.captures(line) {
                comments.push(Comment {
                    file: path.to_path_buf(),
                    line: idx + 1,
                    kind: caps[1].to_uppercase(),
                    text: caps[3].trim().to_string(),
                    author: caps
                        .get(2)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                });
            }
        }
        comments
    }
}
