//! Splits a pattern into literal and token segments.
//!
//! The scanner works in a single left-to-right pass over the pattern:
//! - A quoted region recognized by the grammar is decoded and treated as
//!   literal text; its contents are never checked for tokens
//! - Otherwise the longest token spelling starting at the cursor wins
//! - Anything else is a literal character
//!
//! Consecutive literal text, decoded or plain, is merged into one segment.

use crate::grammar::Grammar;
use crate::pattern::tokens::{Segment, TokenKind};

/// Iterator over the segments of a pattern in one dialect.
pub struct Segments<'a, G: ?Sized> {
    /// The pattern being scanned.
    input: &'a str,
    grammar: &'a G,
    /// Byte offset of the cursor.
    position: usize,
    /// A token found right after a literal run, returned on the next call.
    pending: Option<TokenKind>,
}

impl<'a, G: Grammar + ?Sized> Segments<'a, G> {
    /// Creates a scanner over `input` using `grammar`'s tokens and quoting.
    pub fn new(input: &'a str, grammar: &'a G) -> Self {
        Self {
            input,
            grammar,
            position: 0,
            pending: None,
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.position..)?.chars().next()
    }
}

impl<G: Grammar + ?Sized> Iterator for Segments<'_, G> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(kind) = self.pending.take() {
            return Some(Segment::Token(kind));
        }

        let mut literal = String::new();
        while let Some(ch) = self.current_char() {
            if let Some(escaped) = self.grammar.read_escaped(self.input, self.position) {
                literal.push_str(&escaped.value);
                self.position += escaped.len;
                continue;
            }

            if let Some((kind, len)) = self.grammar.match_token(self.input, self.position) {
                self.position += len;
                if literal.is_empty() {
                    return Some(Segment::Token(kind));
                }
                self.pending = Some(kind);
                return Some(Segment::Literal(literal));
            }

            literal.push(ch);
            self.position += ch.len_utf8();
        }

        if literal.is_empty() {
            None
        } else {
            Some(Segment::Literal(literal))
        }
    }
}

/// Returns the segments of `pattern` read in `grammar`.
pub fn segments<'a, G: Grammar + ?Sized>(pattern: &'a str, grammar: &'a G) -> Segments<'a, G> {
    Segments::new(pattern, grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::MOMENT;

    #[test]
    fn test_empty_input() {
        assert_eq!(segments("", &MOMENT).next(), None);
    }

    #[test]
    fn test_single_token() {
        let parts: Vec<_> = segments("YYYY", &MOMENT).collect();
        assert_eq!(parts, vec![Segment::Token(TokenKind::YearLong)]);
    }
}
