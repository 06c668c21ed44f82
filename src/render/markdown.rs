//! Markdown table output

use std::io::Write;

use crate::types::Comment;

use super::RenderError;

/// Write comments as a markdown table
pub fn write<W: Write>(w: &mut W, comments: &[Comment]) -> Result<(), RenderError> {
    if comments.is_empty() {
        return Ok(());
    }

    writeln!(w, "| Type | Author | File:Line | Text |")?;
    writeln!(w, "| --- | --- | --- | --- |")?;

    for c in comments {
        writeln!(
            w,
            "| {} | {} | {}:{} | {} |",
            c.kind,
            c.author,
            c.file.display(),
            c.line,
            c.text
        )?;
    }

    Ok(())
}
