//! Physical filesystem implementation
//!
//! This module provides `PhysicalFS`, which uses the real OS filesystem.
//! This is the production adapter used by the CLI.

use std::fs;
use std::path::Path;

use super::{FileSystem, FilesystemError};

/// Physical filesystem adapter
///
/// Uses `std::fs` to interact with the real filesystem. Used in production
/// but never in tests (tests use `MemoryFS`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalFS;

impl PhysicalFS {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for PhysicalFS {
    fn read_to_string(&self, path: &Path) -> Result<String, FilesystemError> {
        match fs::read(path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => Err(FilesystemError::from_io(path, err)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

// Note: We don't add #[cfg(test)] tests for PhysicalFS here because
// testing it would require touching the real filesystem. It is a thin
// wrapper over std::fs; the FileSystem trait contract is tested with
// MemoryFS.
