//! JSON output

use std::io::Write;

use crate::types::Comment;

use super::RenderError;

/// Write comments as a pretty-printed JSON array
pub fn write<W: Write>(w: &mut W, comments: &[Comment]) -> Result<(), RenderError> {
    if comments.is_empty() {
        return Ok(());
    }

    serde_json::to_writer_pretty(&mut *w, comments)?;
    writeln!(w)?;
    Ok(())
}
