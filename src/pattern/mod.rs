//! Translation of date patterns between dialects.

pub mod scanner;
pub mod tokens;

use tracing::debug;

use crate::grammar::Grammar;
use scanner::Segments;
use tokens::Segment;

/// Rewrites `pattern` from the `source` dialect into the `dest` dialect.
///
/// Literal text is preserved and re-quoted in `dest`'s syntax. A token with
/// no spelling in `dest` is dropped. When both grammars are the same dialect
/// the pattern is returned unchanged.
///
/// Never fails: text that is neither a quoted region nor a token is literal.
///
/// Adjacent tokens are emitted back to back, so the output may re-tokenize
/// differently in `dest`: datepicker `ddd` (day `dd` then `d`) becomes moment
/// `DDD`, which moment reads as day of year.
pub fn translate<S, D>(pattern: &str, source: &S, dest: &D) -> String
where
    S: Grammar + ?Sized,
    D: Grammar + ?Sized,
{
    if source.name() == dest.name() {
        return pattern.to_string();
    }

    let mut result = String::with_capacity(pattern.len());
    for segment in Segments::new(pattern, source) {
        match segment {
            Segment::Literal(text) => result.push_str(&dest.escape_literal(&text)),
            Segment::Token(kind) => match dest.spelling(kind) {
                Some(spelling) => result.push_str(spelling),
                None => {
                    debug!(
                        ?kind,
                        source = source.name(),
                        dest = dest.name(),
                        "token has no spelling in destination dialect, dropped"
                    );
                }
            },
        }
    }
    result
}
