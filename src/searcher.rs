//! Scan orchestration
//!
//! `Searcher` ties the seams together: it asks the walker for files, reads
//! each one through the filesystem abstraction, and hands the content to
//! the marker parser. It is generic over the `FileSystem` and `Walker`
//! traits, so the whole pipeline runs against in-memory fakes in tests.

use std::path::Path;

use thiserror::Error;

use crate::filesystem::{FileSystem, FilesystemError};
use crate::parser::MarkerParser;
use crate::types::Comment;
use crate::walker::Walker;

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Read(#[from] FilesystemError),
}

/// Scan driver, generic over the filesystem and walker seams
pub struct Searcher<FS, W>
where
    FS: FileSystem,
    W: Walker,
{
    fs: FS,
    parser: MarkerParser,
    walker: W,
}

impl<FS, W> Searcher<FS, W>
where
    FS: FileSystem,
    W: Walker,
{
    pub fn new(fs: FS, parser: MarkerParser, walker: W) -> Self {
        Self { fs, parser, walker }
    }

    fn scan_file(&self, path: &Path) -> Result<Vec<Comment>, FilesystemError> {
        let content = self.fs.read_to_string(path)?;
        Ok(self.parser.parse(&content, path))
    }

    /// Scan every file the walker yields and collect all marker comments.
    ///
    /// Files that vanish or are unreadable between the walk and the read
    /// are skipped with a warning; any other read failure aborts the scan.
    pub fn search_all(&self) -> Result<Vec<Comment>, SearchError> {
        let mut comments = Vec::new();

        for path in self.walker.files() {
            match self.scan_file(&path) {
                Ok(mut found) => {
                    tracing::debug!("{}: {} comments", path.display(), found.len());
                    comments.append(&mut found);
                }
                Err(err) if err.is_skippable() => {
                    tracing::warn!("skipping {}: {err}", path.display());
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(comments)
    }
}
