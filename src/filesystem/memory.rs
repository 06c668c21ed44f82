//! In-memory filesystem implementation for testing
//!
//! This module provides `MemoryFS`, a fake filesystem that stores all data
//! in memory. It's used for hermetic testing without touching the real
//! filesystem.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::{FileSystem, FilesystemError};

/// In-memory filesystem for testing
///
/// Fast, deterministic, and allows complete control over the filesystem
/// state in tests, including permission failures.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub(crate) struct MemoryFS {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    denied: Arc<RwLock<HashSet<PathBuf>>>,
}

#[allow(dead_code)]
impl MemoryFS {
    /// Create a new empty in-memory filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content
    pub fn add_file(&self, path: &Path, content: &str) {
        self.files
            .write()
            .expect("MemoryFS lock poisoned")
            .insert(path.to_path_buf(), content.to_string());
    }

    /// Mark a path as unreadable; reads will fail with permission denied
    pub fn deny(&self, path: &Path) {
        self.denied
            .write()
            .expect("MemoryFS lock poisoned")
            .insert(path.to_path_buf());
    }
}

impl FileSystem for MemoryFS {
    fn read_to_string(&self, path: &Path) -> Result<String, FilesystemError> {
        if self
            .denied
            .read()
            .expect("MemoryFS lock poisoned")
            .contains(path)
        {
            return Err(FilesystemError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }

        self.files
            .read()
            .expect("MemoryFS lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| FilesystemError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .expect("MemoryFS lock poisoned")
            .contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path)
    }
}
