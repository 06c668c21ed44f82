//! Per-file grouped output

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use crate::types::Comment;

use super::RenderError;

/// Write comments grouped under their file, files in sorted order
pub fn write<W: Write>(w: &mut W, comments: &[Comment]) -> Result<(), RenderError> {
    if comments.is_empty() {
        return Ok(());
    }

    let mut groups: BTreeMap<&PathBuf, Vec<&Comment>> = BTreeMap::new();
    for comment in comments {
        groups.entry(&comment.file).or_default().push(comment);
    }

    for (file, group) in groups {
        writeln!(w, "{} [{} comments]:", file.display(), group.len())?;
        for c in group {
            let author = if c.author.is_empty() {
                String::new()
            } else {
                format!("({})", c.author)
            };
            writeln!(w, "  {:>4} | {}{}: {}", c.line, c.kind, author, c.text)?;
        }
        writeln!(w)?;
    }

    Ok(())
}
