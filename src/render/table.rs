//! Aligned-column table output

use std::io::Write;

use crate::types::Comment;

use super::RenderError;

const HEADER: [&str; 4] = ["AUTHOR", "TYPE", "LOCATION", "TEXT"];
const COLOR_TYPE: &str = "\x1b[36m";
const COLOR_RESET: &str = "\x1b[0m";

/// Write comments as an aligned table.
///
/// Column widths are computed from the data; the marker type is colorized
/// when `color` is set. The text column is last and unpadded.
pub fn write<W: Write>(w: &mut W, comments: &[Comment], color: bool) -> Result<(), RenderError> {
    if comments.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 4]> = comments
        .iter()
        .map(|c| {
            let author = if c.author.is_empty() {
                "unknown".to_string()
            } else {
                c.author.clone()
            };
            let location = format!("{}:{}", c.file.display(), c.line);
            [author, c.kind.clone(), location, c.text.clone()]
        })
        .collect();

    let mut widths = [0usize; 3];
    for cells in std::iter::once(&HEADER.map(String::from)).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(w, &HEADER.map(String::from), &widths, false)?;
    for cells in &rows {
        write_row(w, cells, &widths, color)?;
    }

    Ok(())
}

fn write_row<W: Write>(
    w: &mut W,
    cells: &[String; 4],
    widths: &[usize; 3],
    color: bool,
) -> Result<(), RenderError> {
    for (i, cell) in cells.iter().enumerate().take(3) {
        let pad = " ".repeat(widths[i] - cell.chars().count() + 2);
        if i == 1 && color {
            write!(w, "{COLOR_TYPE}{cell}{COLOR_RESET}{pad}")?;
        } else {
            write!(w, "{cell}{pad}")?;
        }
    }
    writeln!(w, "{}", cells[3])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_fixtures::sample_comments;

    #[test]
    fn test_table_has_header_and_rows() {
        let mut out = Vec::new();
        write(&mut out, &sample_comments(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("AUTHOR"));
        assert!(lines[1].contains("src/lib.rs:4"));
        assert!(lines[1].contains("export the builder"));
    }

    #[test]
    fn test_empty_author_renders_as_unknown() {
        let mut out = Vec::new();
        write(&mut out, &sample_comments(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("unknown"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut out = Vec::new();
        write(&mut out, &sample_comments(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        // the TYPE column starts at the same offset on every line
        let offsets: Vec<usize> = text
            .lines()
            .map(|line| {
                if line.contains("FIXME") {
                    line.find("FIXME").unwrap()
                } else if line.contains("TODO") {
                    line.find("TODO").unwrap()
                } else {
                    line.find("TYPE").unwrap()
                }
            })
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_color_wraps_type_only() {
        let mut out = Vec::new();
        write(&mut out, &sample_comments(), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.lines().next().unwrap().contains(COLOR_TYPE));
        assert!(text.contains(&format!("{COLOR_TYPE}TODO{COLOR_RESET}")));
    }
}
