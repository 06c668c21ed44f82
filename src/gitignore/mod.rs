//! Gitignore-style path filtering
//!
//! Two layers: `pattern` answers whether one pattern matches one path, and
//! `evaluator` combines an ordered pattern list with filesystem metadata
//! into a keep/drop decision. Both are pure and stateless across calls, so
//! they can be shared freely between directory-walk workers. `glob` is the
//! single-segment wildcard primitive underneath both.

pub mod evaluator;
pub mod glob;
pub mod pattern;

pub use evaluator::IgnoreList;
pub use glob::GlobError;
pub use pattern::PatternError;
