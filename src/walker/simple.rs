//! Simple walker implementation for testing
//!
//! This module provides `SimpleWalker`, a test double that returns a
//! predefined list of files. This allows testing scan logic without
//! filesystem traversal.

use std::path::PathBuf;

use super::Walker;

/// Simple walker for testing
///
/// Returns a predefined list of file paths, in order.
#[allow(dead_code)]
pub(crate) struct SimpleWalker {
    files: Vec<PathBuf>,
}

#[allow(dead_code)]
impl SimpleWalker {
    /// Create a new simple walker with the given file list
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Create a simple walker from string paths (convenience for tests)
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let files = paths.iter().map(|s| PathBuf::from(s.as_ref())).collect();
        Self::new(files)
    }
}

impl Walker for SimpleWalker {
    fn files(&self) -> Box<dyn Iterator<Item = PathBuf> + '_> {
        Box::new(self.files.clone().into_iter())
    }
}
