//! Filesystem abstraction - the primary test seam
//!
//! This module defines the `FileSystem` trait which provides an abstraction
//! over filesystem operations. This allows the scan pipeline to be tested
//! without touching the real filesystem.

pub mod memory;
pub mod physical;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading a file
///
/// Not-found and permission-denied are split out because the scan driver
/// skips over them instead of aborting the run.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FilesystemError {
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// True for the error kinds the scan driver skips over: an unreadable
    /// or vanished file cannot contribute comments, and should not take
    /// down the rest of the scan.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PermissionDenied { .. })
    }
}

/// Abstract filesystem interface
///
/// Implementations can be backed by the real filesystem (`PhysicalFS`) or
/// in-memory storage (`MemoryFS` for testing).
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file as a string.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; source trees contain
    /// the occasional latin-1 comment and that must not abort a scan.
    fn read_to_string(&self, path: &Path) -> Result<String, FilesystemError>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file (not a directory)
    fn is_file(&self, path: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::memory::MemoryFS;
    use std::path::PathBuf;

    /// Contract test that verifies any `FileSystem` implementation
    /// satisfies the basic requirements
    fn test_filesystem_contract<F: FileSystem>(fs: F, test_file: &Path, test_content: &str) {
        assert!(fs.exists(test_file), "File should exist");
        assert!(fs.is_file(test_file), "Should be identified as file");

        let content = fs
            .read_to_string(test_file)
            .expect("Should read existing file");
        assert_eq!(content, test_content);

        let nonexistent = Path::new("/nonexistent.txt");
        assert!(!fs.exists(nonexistent), "Nonexistent file should not exist");
        assert!(
            matches!(
                fs.read_to_string(nonexistent),
                Err(FilesystemError::NotFound { .. })
            ),
            "Reading nonexistent file should be NotFound"
        );
    }

    #[test]
    fn test_memory_fs_satisfies_contract() {
        let fs = MemoryFS::new();
        let test_path = PathBuf::from("/test/file.txt");
        let test_content = "line 1\nline 2\nline 3\n";

        fs.add_file(&test_path, test_content);

        test_filesystem_contract(fs, &test_path, test_content);
    }

    #[test]
    fn test_skippable_errors() {
        assert!(
            FilesystemError::NotFound {
                path: PathBuf::from("x")
            }
            .is_skippable()
        );
        assert!(
            FilesystemError::PermissionDenied {
                path: PathBuf::from("x")
            }
            .is_skippable()
        );
        assert!(
            !FilesystemError::NotAFile {
                path: PathBuf::from("x")
            }
            .is_skippable()
        );
    }
}
