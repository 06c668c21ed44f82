//! Production walker built on the ignore crate
//!
//! This module provides `IgnoreWalker`, which uses the ignore crate's
//! `WalkBuilder` for depth-first traversal. All of the crate's own
//! gitignore and hidden-file handling is switched off: filtering is done
//! exclusively by our `IgnoreList`, wired in through `filter_entry` so
//! that an ignored directory is never descended into.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::Walker;
use crate::gitignore::IgnoreList;

/// Production walker driven by an `IgnoreList`
pub struct IgnoreWalker {
    root: PathBuf,
    ignore: IgnoreList,
}

impl IgnoreWalker {
    /// Create a walker rooted at `root`, filtered by `ignore`
    pub fn new(root: impl AsRef<Path>, ignore: IgnoreList) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ignore,
        }
    }
}

impl Walker for IgnoreWalker {
    fn files(&self) -> Box<dyn Iterator<Item = PathBuf> + '_> {
        let ignore = self.ignore.clone();

        let walker = WalkBuilder::new(&self.root)
            // pattern semantics live in IgnoreList, not in the walker
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            // the hidden-entry rule is the evaluator's too
            .hidden(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !ignore.should_ignore(entry.path(), is_dir)
            })
            .build();

        Box::new(
            walker
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::warn!("walk error: {err}");
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
                .map(|entry| entry.into_path()),
        )
    }
}

// Real-tree behavior (including the directory descent short-circuit) is
// covered by the integration tests in lib.rs, which build a temporary
// directory; unit tests for scan logic use SimpleWalker instead.
