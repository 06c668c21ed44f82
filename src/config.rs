//! Ignore-pattern configuration
//!
//! Assembles the ordered pattern list the evaluator runs against: ignore
//! terms given on the command line first, then the lines of the scan
//! root's `.gitignore`. Insertion order is preserved; it decides which
//! pattern's error is observed first when several are malformed.

use std::fs;
use std::io;
use std::path::Path;

const GITIGNORE_FILE: &str = ".gitignore";

/// The ignore term that disables scanning hidden entries instead of acting
/// as a pattern.
const HIDDEN_TOGGLE: &str = ".*";

/// Read ignore patterns from the `.gitignore` in `dir`.
///
/// Comment lines and blank lines are filtered out here, so the matcher
/// only ever sees real patterns. A missing file is an empty list, not an
/// error.
pub fn load_gitignore(dir: &Path) -> io::Result<Vec<String>> {
    let path = dir.join(GITIGNORE_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    Ok(content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Pull the `.*` hidden toggle out of the pattern list.
///
/// Returns the remaining patterns and whether the toggle was present.
pub fn split_hidden_toggle(mut patterns: Vec<String>) -> (Vec<String>, bool) {
    let before = patterns.len();
    patterns.retain(|p| p != HIDDEN_TOGGLE);
    let toggled = patterns.len() != before;
    (patterns, toggled)
}
