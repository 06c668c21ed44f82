//! Output rendering
//!
//! Writers for the supported output shapes. Each writer takes a sorted
//! comment slice and an `io::Write`; an empty scan writes nothing in any
//! format.

pub mod group;
pub mod json;
pub mod markdown;
pub mod table;

use std::io::Write;

use clap::ValueEnum;
use thiserror::Error;

use crate::types::Comment;

/// Output format selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned columns, one comment per row
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// A markdown table
    Markdown,
    /// Comments grouped per file
    Group,
}

/// Errors from writing rendered output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Render `comments` to `w` in the chosen format.
///
/// `color` only affects the table format and should be true when writing
/// to a terminal.
pub fn write<W: Write>(
    w: &mut W,
    comments: &[Comment],
    format: OutputFormat,
    color: bool,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Table => table::write(w, comments, color),
        OutputFormat::Json => json::write(w, comments),
        OutputFormat::Markdown => markdown::write(w, comments),
        OutputFormat::Group => group::write(w, comments),
    }
}
