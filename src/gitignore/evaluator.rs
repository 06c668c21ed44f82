//! Ignore-list evaluation
//!
//! Combines an ordered list of patterns with filesystem metadata to decide
//! whether a visited path is kept or dropped. The decision is a simple OR
//! over the patterns: each pattern is tested independently and any match
//! (after its own negation is applied) drops the path. Hidden entries are
//! handled before any pattern runs, so traversal can stop descending into a
//! hidden directory without ever consulting the list.

use std::path::Path;

use super::{glob, pattern};

/// An ordered ignore list plus the hidden-file policy.
///
/// Patterns are held as raw lines; all derived properties are computed at
/// match time. The list is immutable after construction and safe to share
/// across walk workers.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<String>,
    search_hidden: bool,
}

impl IgnoreList {
    pub fn new(patterns: Vec<String>, search_hidden: bool) -> Self {
        Self {
            patterns,
            search_hidden,
        }
    }

    /// Decide whether a path should be dropped from the scan.
    ///
    /// For a directory, `true` means the traversal must not descend into it
    /// at all; directories are never reported as results either way. A
    /// pattern that fails to compile counts as a match: a broken pattern
    /// should not surface paths the user meant to hide, and should not
    /// abort the scan.
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !self.search_hidden && name.starts_with('.') && name != "." {
            return true;
        }

        let path_str = path.to_string_lossy();

        for raw in &self.patterns {
            // trailing `/` means the pattern applies to directories only
            if pattern::is_dir_only(raw) && !is_dir {
                continue;
            }

            match pattern::matches(raw, &path_str) {
                Ok(true) => return true,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!("broken ignore pattern `{raw}`: {err}");
                    return true;
                }
            }

            // cheap short-circuit for the common "ignore this filename"
            // case; negated patterns only make sense against the full path
            if !pattern::is_negated(raw) {
                match glob::match_segment(pattern::literal(raw), &name) {
                    Ok(true) => return true,
                    Ok(false) => {}
                    Err(err) => {
                        tracing::warn!("broken ignore pattern `{raw}`: {err}");
                        return true;
                    }
                }
            }
        }

        false
    }
}
