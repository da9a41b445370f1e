//! Date pattern dialects.
//!
//! A dialect maps every [`TokenKind`] to the spelling one formatting library
//! uses for it, and knows how that library quotes literal text. Dialects are
//! plain values: adding one means building another [`DateDialect`] (or
//! implementing [`Grammar`] directly), never editing a central switch.

mod builtin;

use std::borrow::Cow;
use std::fmt;

use crate::pattern::tokens::TokenKind;

pub use builtin::{DATEPICKER, GRAMMAR_A, GRAMMAR_B, MOMENT, STRFTIME};

/// A quoted literal region recognized inside a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped<'a> {
    /// The decoded literal text.
    pub value: Cow<'a, str>,
    /// Number of bytes of the pattern the region occupies, delimiters included.
    pub len: usize,
}

/// The capabilities the translator needs from a dialect.
pub trait Grammar {
    /// Identifies the dialect. Two grammars with the same name are treated as
    /// the same dialect.
    fn name(&self) -> &str;

    /// The spelling of `kind`, or `None` if the dialect has no such token.
    fn spelling(&self, kind: TokenKind) -> Option<&str>;

    /// Quotes `literal` so it reads back as literal text in this dialect.
    fn escape_literal(&self, literal: &str) -> String;

    /// Recognizes a quoted region starting at byte `index` of `pattern`.
    ///
    /// A returned region always has a non-zero `len`.
    fn read_escaped<'a>(&self, pattern: &'a str, index: usize) -> Option<Escaped<'a>>;

    /// Finds the longest token spelling that starts at byte `index`.
    ///
    /// Returns the kind and the spelling's length in bytes. Spellings are
    /// distinct, so two equal-length spellings can never both match and the
    /// scan order only matters for length.
    fn match_token(&self, pattern: &str, index: usize) -> Option<(TokenKind, usize)> {
        let rest = pattern.get(index..)?;
        let mut best: Option<(TokenKind, usize)> = None;
        for kind in TokenKind::ALL {
            let Some(spelling) = self.spelling(kind) else {
                continue;
            };
            if !rest.starts_with(spelling) {
                continue;
            }
            if best.map_or(true, |(_, len)| spelling.len() > len) {
                best = Some((kind, spelling.len()));
            }
        }
        best
    }
}

/// Quotes a literal for a dialect, given that dialect's reserved characters.
pub type EscapeFn = fn(literal: &str, reserved: &str) -> String;

/// Recognizes a quoted region at a byte offset.
pub type RecognizeFn = for<'a> fn(pattern: &'a str, index: usize) -> Option<Escaped<'a>>;

/// A dialect described purely as data.
#[derive(Clone, Copy)]
pub struct DateDialect {
    pub name: &'static str,
    /// Spellings indexed by [`TokenKind::index`]. Empty means "no such token".
    pub spellings: [&'static str; TokenKind::COUNT],
    /// Characters that force a literal to be quoted.
    pub reserved: &'static str,
    pub escape: EscapeFn,
    pub recognize: RecognizeFn,
}

impl fmt::Debug for DateDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateDialect")
            .field("name", &self.name)
            .field("spellings", &self.spellings)
            .field("reserved", &self.reserved)
            .finish_non_exhaustive()
    }
}

impl Grammar for DateDialect {
    fn name(&self) -> &str {
        self.name
    }

    fn spelling(&self, kind: TokenKind) -> Option<&str> {
        match self.spellings[kind.index()] {
            "" => None,
            spelling => Some(spelling),
        }
    }

    fn escape_literal(&self, literal: &str) -> String {
        (self.escape)(literal, self.reserved)
    }

    fn read_escaped<'a>(&self, pattern: &'a str, index: usize) -> Option<Escaped<'a>> {
        (self.recognize)(pattern, index).filter(|escaped| escaped.len > 0)
    }
}

/// Returns true if `text` contains any character of `reserved`.
pub(crate) fn contains_reserved(text: &str, reserved: &str) -> bool {
    text.chars().any(|c| reserved.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spelling_is_absent() {
        assert_eq!(STRFTIME.spelling(TokenKind::FractionalSecond1), None);
        assert_eq!(STRFTIME.spelling(TokenKind::FractionalSecond3), Some("%3f"));
    }

    #[test]
    fn test_match_token_out_of_range() {
        assert_eq!(MOMENT.match_token("YYYY", 10), None);
    }

    #[test]
    fn test_contains_reserved() {
        assert!(contains_reserved("at", "a"));
        assert!(!contains_reserved("-/:", "MoDd"));
    }
}
