//! Gitignore-style pattern matching
//!
//! A pattern is one line of ignore-file syntax: it may be negated with a
//! leading `!`, marked directory-only with a trailing `/`, anchored by
//! containing a `/`, and may use single-segment globs or the recursive `**`
//! wildcard. Matching is a pure function of (pattern, path); directory-only
//! enforcement needs filesystem metadata and lives in the evaluator.
//!
//! Reference semantics: <https://git-scm.com/docs/gitignore>. This is a
//! practical subset; character-class escaping quirks and last-match-wins
//! negation across a pattern list are out of scope.

use std::borrow::Cow;
use std::path::MAIN_SEPARATOR;

use thiserror::Error;

use super::glob::{self, Glob, GlobError};

const DOUBLE_STAR: &str = "**";
const COMMENT: char = '#';
const NEGATE: char = '!';

/// A malformed pattern, surfaced so callers can fail safe instead of
/// silently keeping paths the user meant to hide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(transparent)]
pub struct PatternError(#[from] GlobError);

/// Match one ignore pattern against one path.
///
/// The raw match result is inverted when the pattern carries a leading `!`,
/// in every branch: `matches(p, x) == !matches("!p", x)` for any `p` that is
/// not itself negated.
pub fn matches(pattern: &str, path: &str) -> Result<bool, PatternError> {
    if pattern.is_empty() {
        return Ok(false);
    }

    // comment lines are filtered by the loader, but tolerate them here too
    if pattern.starts_with(COMMENT) {
        return Ok(false);
    }

    let pattern = pattern.strip_suffix(' ').unwrap_or(pattern);

    let (pattern, negated) = match pattern.strip_prefix(NEGATE) {
        Some(rest) => (rest, true),
        None => (pattern, false),
    };

    let pattern = to_slash(pattern);
    let pattern = pattern.strip_suffix('/').unwrap_or(&pattern);
    let path = to_slash(path);

    if pattern.contains(DOUBLE_STAR) {
        return Ok(match_double_star(pattern, &path) != negated);
    }

    let hit = if pattern.contains('/') {
        match_anchored(pattern, &path)?
    } else {
        glob::match_segment(pattern, base_name(&path))?
    };

    Ok(hit != negated)
}

/// True if the pattern is marked directory-only with a trailing `/`
pub fn is_dir_only(pattern: &str) -> bool {
    let pattern = pattern.strip_suffix(' ').unwrap_or(pattern);
    pattern.ends_with('/') || pattern.ends_with(MAIN_SEPARATOR)
}

/// True if the pattern carries a leading `!`
pub fn is_negated(pattern: &str) -> bool {
    pattern.starts_with(NEGATE)
}

/// The pattern text with the negation marker and directory marker stripped
pub fn literal(pattern: &str) -> &str {
    let pattern = pattern.strip_suffix(' ').unwrap_or(pattern);
    let pattern = pattern.strip_prefix(NEGATE).unwrap_or(pattern);
    let pattern = pattern.strip_suffix('/').unwrap_or(pattern);
    if MAIN_SEPARATOR != '/' {
        return pattern
            .strip_suffix(MAIN_SEPARATOR)
            .unwrap_or(pattern);
    }
    pattern
}

/// Normalize to `/` separators so wildcard logic is separator-agnostic
fn to_slash(s: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR == '/' || !s.contains(MAIN_SEPARATOR) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.replace(MAIN_SEPARATOR, "/"))
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// The three `**` shapes, on slash-normalized strings.
///
/// `**/x` is a suffix test, `x/**` a prefix test. With `**` in the middle
/// the pattern splits into parts that must appear in order: the first as a
/// prefix, the last as a suffix of what remains, middles consumed by
/// forward substring search. The prefix is trimmed before the suffix test,
/// so `a/**/b` requires at least one segment between `a` and `b`.
fn match_double_star(pattern: &str, path: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix(DOUBLE_STAR) {
        return path.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix(DOUBLE_STAR) {
        return path.starts_with(prefix);
    }

    let parts: Vec<&str> = pattern.split(DOUBLE_STAR).collect();
    let Some(mut rest) = path.strip_prefix(parts[0]) else {
        return false;
    };

    for part in &parts[1..parts.len() - 1] {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(parts[parts.len() - 1])
}

/// Anchored patterns match their segments, glob-wise, against any
/// consecutive run of the path's segments. This keeps "match at any depth"
/// behavior without touching the filesystem.
fn match_anchored(pattern: &str, path: &str) -> Result<bool, GlobError> {
    let globs: Vec<Glob> = pattern
        .split('/')
        .filter(|seg| !seg.is_empty())
        .map(Glob::new)
        .collect::<Result<_, _>>()?;

    let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

    if globs.is_empty() || globs.len() > segments.len() {
        return Ok(false);
    }

    Ok((0..=segments.len() - globs.len()).any(|start| {
        globs
            .iter()
            .zip(&segments[start..])
            .all(|(glob, seg)| glob.matches(seg))
    }))
}
