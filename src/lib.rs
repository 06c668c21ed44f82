//! Markers - scan source trees for marker comments
//!
//! This library extracts `TODO`/`FIXME`-style marker comments from every
//! file in a directory tree, filtering paths with a gitignore-style
//! pattern matcher implemented in [`gitignore`].
//!
//! # Architecture
//!
//! The codebase follows hexagonal architecture (Ports and Adapters):
//!
//! - **Ports** (abstract interfaces): `FileSystem` and `Walker` traits
//! - **Adapters** (concrete implementations):
//!   - Production: `PhysicalFS`, `IgnoreWalker`
//!   - Testing: `MemoryFS`, `SimpleWalker`
//! - **Functional core**: the `gitignore` matcher and evaluator are pure
//!   functions of their inputs; `Searcher` depends only on the traits
//!
//! # Example
//!
//! ```rust,no_run
//! use markers::filesystem::physical::PhysicalFS;
//! use markers::gitignore::IgnoreList;
//! use markers::parser::MarkerParser;
//! use markers::searcher::Searcher;
//! use markers::walker::ignore_walker::IgnoreWalker;
//!
//! let parser = MarkerParser::new(&["TODO".to_string()]).unwrap();
//! let ignore = IgnoreList::new(vec!["target/".to_string()], false);
//! let walker = IgnoreWalker::new(".", ignore);
//!
//! let searcher = Searcher::new(PhysicalFS::new(), parser, walker);
//! let comments = searcher.search_all().unwrap();
//!
//! println!("found {} comments", comments.len());
//! ```

pub mod cli;
pub mod config;
pub mod filesystem;
pub mod gitignore;
pub mod parser;
pub mod render;
pub mod searcher;
pub mod types;
pub mod walker;

// Re-export commonly used types
pub use gitignore::IgnoreList;
pub use searcher::{SearchError, Searcher};
pub use types::{Comment, SortKey, SortSpec, sort_comments};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::filesystem::memory::MemoryFS;
    use crate::filesystem::physical::PhysicalFS;
    use crate::parser::MarkerParser;
    use crate::walker::ignore_walker::IgnoreWalker;
    use crate::walker::simple::SimpleWalker;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn parser() -> MarkerParser {
        MarkerParser::new(&["TODO".to_string(), "FIXME".to_string()]).unwrap()
    }

    /// Full-stack test with the in-memory filesystem: walk, read, parse.
    #[test]
    fn test_pipeline_with_memory_fs() {
        let fs = MemoryFS::new();
        fs.add_file(
            Path::new("/project/src/main.rs"),
            "fn main() {\n    // TODO: parse args\n}\n",
        );
        fs.add_file(
            Path::new("/project/src/lib.rs"),
            "// FIXME(ana): leaks on shutdown\npub fn run() {}\n",
        );

        let walker = SimpleWalker::from_paths(&["/project/src/lib.rs", "/project/src/main.rs"]);
        let searcher = Searcher::new(fs, parser(), walker);

        let mut comments = searcher.search_all().unwrap();
        sort_comments(&mut comments, SortSpec::default());

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].file, PathBuf::from("/project/src/lib.rs"));
        assert_eq!(comments[0].kind, "FIXME");
        assert_eq!(comments[0].author, "ana");
        assert_eq!(comments[1].line, 2);
        assert_eq!(comments[1].text, "parse args");
    }

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// End-to-end over a real tree: ignored patterns, an ignored directory
    /// whose subtree is never entered, and a hidden directory.
    #[test]
    fn test_scan_with_real_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");

        write_file(&root.join("main.go"), "// TODO: ship it\n");
        write_file(&root.join("file.yml"), "# TODO: not reported\n");
        write_file(
            &root.join("node_modules/pkg/index.js"),
            "// TODO: vendored\n",
        );
        write_file(&root.join(".secret/notes.txt"), "TODO: hidden\n");

        let patterns = vec![
            ".bin".to_string(),
            "node_modules/".to_string(),
            "*.yml".to_string(),
        ];
        let walker = IgnoreWalker::new(&root, IgnoreList::new(patterns, false));
        let searcher = Searcher::new(PhysicalFS::new(), parser(), walker);

        let comments = searcher.search_all().unwrap();
        assert_eq!(comments.len(), 1);
        assert!(comments[0].file.ends_with("main.go"));
        assert_eq!(comments[0].text, "ship it");
    }

    /// The walker never yields paths under an ignored or hidden directory.
    #[test]
    fn test_walker_descent_short_circuit() {
        use crate::walker::Walker;

        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");

        write_file(&root.join("keep.rs"), "");
        write_file(&root.join("node_modules/deep/nested/mod.js"), "");
        write_file(&root.join(".git/objects/aa/blob"), "");

        let walker = IgnoreWalker::new(
            &root,
            IgnoreList::new(vec!["node_modules/".to_string()], false),
        );
        let files: Vec<PathBuf> = walker.files().collect();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.rs"));
    }

    /// Hidden entries come back once hidden scanning is enabled.
    #[test]
    fn test_hidden_files_scanned_when_enabled() {
        use crate::walker::Walker;

        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");

        write_file(&root.join(".env"), "# TODO: rotate keys\n");

        let hidden_off = IgnoreWalker::new(&root, IgnoreList::new(vec![], false));
        assert!(hidden_off.files().next().is_none());

        let hidden_on = IgnoreWalker::new(&root, IgnoreList::new(vec![], true));
        let files: Vec<PathBuf> = hidden_on.files().collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with(".env"));
    }

    /// Patterns loaded from a .gitignore behave like CLI-supplied ones.
    #[test]
    fn test_gitignore_file_drives_filtering() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");

        write_file(&root.join(".gitignore"), "# generated\n*.yml\n");
        write_file(&root.join("config.yml"), "# TODO: ignored\n");
        write_file(&root.join("main.rs"), "// TODO: kept\n");

        let patterns = config::load_gitignore(&root).unwrap();
        assert_eq!(patterns, vec!["*.yml".to_string()]);

        let walker = IgnoreWalker::new(&root, IgnoreList::new(patterns, false));
        let searcher = Searcher::new(PhysicalFS::new(), parser(), walker);

        let comments = searcher.search_all().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "kept");
    }
}
