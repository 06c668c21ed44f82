//! Single-segment shell glob matching
//!
//! This is the primitive the pattern matcher and evaluator build on. It
//! matches one path segment at a time: `*` matches any run of characters,
//! `?` matches a single character, and `[...]` matches a character class
//! with ranges and `!`/`^` negation. `\` escapes the next character.
//!
//! Malformed patterns are reported as errors rather than silently treated
//! as non-matches, so a broken ignore line is distinguishable from a line
//! that simply doesn't apply.

use thiserror::Error;

/// Errors produced by compiling a glob pattern
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlobError {
    /// A `[` was opened but never closed
    #[error("unclosed character class in glob `{pattern}`")]
    UnclosedClass { pattern: String },

    /// A `[]` or `[!]` with no members
    #[error("empty character class in glob `{pattern}`")]
    EmptyClass { pattern: String },

    /// A range like `[z-a]` whose bounds are reversed
    #[error("invalid character range `{lo}-{hi}` in glob `{pattern}`")]
    InvalidRange { pattern: String, lo: char, hi: char },

    /// A `\` with nothing after it
    #[error("trailing escape in glob `{pattern}`")]
    TrailingEscape { pattern: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

impl Token {
    fn matches_char(&self, c: char) -> bool {
        match self {
            Token::Literal(l) => *l == c,
            Token::AnyChar => true,
            Token::AnyRun => unreachable!("AnyRun is handled by the matcher loop"),
            Token::Class { negated, items } => {
                let hit = items.iter().any(|item| match item {
                    ClassItem::Char(m) => *m == c,
                    ClassItem::Range(lo, hi) => *lo <= c && c <= *hi,
                });
                hit != *negated
            }
        }
    }
}

/// A compiled single-segment glob
///
/// Compiling up front means a malformed pattern fails deterministically,
/// instead of only when matching happens to reach the bad spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    tokens: Vec<Token>,
}

impl Glob {
    /// Compile a glob pattern
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    // consecutive stars are equivalent to one
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                    i += 1;
                }
                '?' => {
                    tokens.push(Token::AnyChar);
                    i += 1;
                }
                '\\' => {
                    let escaped =
                        *chars
                            .get(i + 1)
                            .ok_or_else(|| GlobError::TrailingEscape {
                                pattern: pattern.to_string(),
                            })?;
                    tokens.push(Token::Literal(escaped));
                    i += 2;
                }
                '[' => {
                    let (token, next) = parse_class(pattern, &chars, i + 1)?;
                    tokens.push(token);
                    i = next;
                }
                other => {
                    tokens.push(Token::Literal(other));
                    i += 1;
                }
            }
        }

        Ok(Self { tokens })
    }

    /// Test a single segment against the compiled pattern
    pub fn matches(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        match_tokens(&self.tokens, &chars)
    }
}

/// Parse a `[...]` class starting just after the opening bracket.
///
/// Returns the class token and the index just past the closing `]`.
fn parse_class(
    pattern: &str,
    chars: &[char],
    mut i: usize,
) -> Result<(Token, usize), GlobError> {
    let unclosed = || GlobError::UnclosedClass {
        pattern: pattern.to_string(),
    };

    let negated = matches!(chars.get(i), Some(&('!' | '^')));
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    loop {
        let c = match *chars.get(i).ok_or_else(unclosed)? {
            ']' if !items.is_empty() => {
                i += 1;
                break;
            }
            ']' => {
                return Err(GlobError::EmptyClass {
                    pattern: pattern.to_string(),
                });
            }
            '\\' => {
                i += 1;
                *chars.get(i).ok_or_else(unclosed)?
            }
            other => other,
        };
        i += 1;

        // a `-` between two members forms a range; trailing `-` is literal
        if chars.get(i) == Some(&'-') && !matches!(chars.get(i + 1), Some(&']') | None) {
            i += 1;
            let hi = match *chars.get(i).ok_or_else(unclosed)? {
                '\\' => {
                    i += 1;
                    *chars.get(i).ok_or_else(unclosed)?
                }
                other => other,
            };
            i += 1;
            if c > hi {
                return Err(GlobError::InvalidRange {
                    pattern: pattern.to_string(),
                    lo: c,
                    hi,
                });
            }
            items.push(ClassItem::Range(c, hi));
        } else {
            items.push(ClassItem::Char(c));
        }
    }

    Ok((Token::Class { negated, items }, i))
}

fn match_tokens(tokens: &[Token], chars: &[char]) -> bool {
    match tokens.first() {
        None => chars.is_empty(),
        Some(Token::AnyRun) => {
            (0..=chars.len()).any(|skip| match_tokens(&tokens[1..], &chars[skip..]))
        }
        Some(token) => match chars.first() {
            Some(&c) => token.matches_char(c) && match_tokens(&tokens[1..], &chars[1..]),
            None => false,
        },
    }
}

/// Compile and match in one step
pub fn match_segment(pattern: &str, text: &str) -> Result<bool, GlobError> {
    Ok(Glob::new(pattern)?.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        assert!(match_segment("main.go", "main.go").unwrap());
        assert!(!match_segment("main.go", "main.rs").unwrap());
    }

    #[test]
    fn test_star_matches_any_run() {
        assert!(match_segment("*.yml", "config.yml").unwrap());
        assert!(match_segment("test.*", "test.txt").unwrap());
        assert!(match_segment("*", "anything").unwrap());
        assert!(match_segment("*", "").unwrap());
        assert!(!match_segment("*.yml", "config.yaml").unwrap());
    }

    #[test]
    fn test_star_backtracking() {
        assert!(match_segment("a*b*c", "axxbyyc").unwrap());
        assert!(match_segment("a*b*c", "abc").unwrap());
        assert!(!match_segment("a*b*c", "acb").unwrap());
        assert!(match_segment("**", "double").unwrap());
    }

    #[test]
    fn test_question_matches_one_char() {
        assert!(match_segment("?", "a").unwrap());
        assert!(!match_segment("?", "ab").unwrap());
        assert!(!match_segment("?", "").unwrap());
        assert!(match_segment("fo?", "foo").unwrap());
    }

    #[test]
    fn test_character_class() {
        assert!(match_segment("*.[ch]", "main.c").unwrap());
        assert!(match_segment("*.[ch]", "main.h").unwrap());
        assert!(!match_segment("*.[ch]", "main.o").unwrap());
    }

    #[test]
    fn test_class_ranges() {
        assert!(match_segment("[a-z]", "m").unwrap());
        assert!(!match_segment("[a-z]", "M").unwrap());
        assert!(match_segment("v[0-9].log", "v3.log").unwrap());
    }

    #[test]
    fn test_negated_class() {
        assert!(match_segment("[!abc]", "d").unwrap());
        assert!(!match_segment("[!abc]", "a").unwrap());
        assert!(match_segment("[^0-9]", "x").unwrap());
    }

    #[test]
    fn test_trailing_dash_is_literal() {
        assert!(match_segment("[a-]", "-").unwrap());
        assert!(match_segment("[a-]", "a").unwrap());
        assert!(!match_segment("[a-]", "b").unwrap());
    }

    #[test]
    fn test_escape() {
        assert!(match_segment(r"foo\*", "foo*").unwrap());
        assert!(!match_segment(r"foo\*", "foobar").unwrap());
        assert!(match_segment(r"\[x\]", "[x]").unwrap());
    }

    #[test]
    fn test_unclosed_class_is_error() {
        assert!(matches!(
            match_segment("[unclosed", "x"),
            Err(GlobError::UnclosedClass { .. })
        ));
    }

    #[test]
    fn test_empty_class_is_error() {
        assert!(matches!(
            match_segment("[]", "x"),
            Err(GlobError::EmptyClass { .. })
        ));
    }

    #[test]
    fn test_reversed_range_is_error() {
        assert!(matches!(
            match_segment("[z-a]", "x"),
            Err(GlobError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_trailing_escape_is_error() {
        assert!(matches!(
            match_segment("foo\\", "foo"),
            Err(GlobError::TrailingEscape { .. })
        ));
    }

    #[test]
    fn test_error_is_deterministic() {
        // a bad class after a failing prefix still surfaces the error
        assert!(match_segment("zzz[bad", "different").is_err());
    }

    #[test]
    fn test_escaped_class_member() {
        assert!(match_segment(r"[\]]", "]").unwrap());
        assert!(!match_segment(r"[\]]", "x").unwrap());
    }
}
