//! dtfmt - date pattern translation between formatting dialects
//!
//! This crate rewrites date/time patterns from one library's token vocabulary
//! into another's (moment.js, jQuery datepicker, chrono strftime), keeping
//! literal text intact under each dialect's quoting rules. It also renders
//! stored result payloads (dates, legacy number patterns, links) as HTML
//! tables.

pub mod error;
pub mod grammar;
pub mod number;
pub mod options;
pub mod pattern;
pub mod payload;
pub mod render;

mod cache;
mod locale;

pub use error::{FormatError, PayloadError};
pub use grammar::{
    DateDialect, Escaped, Grammar, DATEPICKER, GRAMMAR_A, GRAMMAR_B, MOMENT, STRFTIME,
};
pub use locale::NumeralLocale;
pub use options::{Language, RenderOptions};
pub use pattern::scanner::{segments, Segments};
pub use pattern::tokens::{Segment, TokenKind};
pub use pattern::translate;
pub use payload::{CellKind, DisplayFormat, ResultPayload};

/// Translates a datepicker pattern into a moment.js pattern.
///
/// Results are cached, so repeated patterns cost one lookup.
pub fn datepicker_to_moment(pattern: &str) -> String {
    cache::translate_cached(pattern, &DATEPICKER, &MOMENT)
}

/// Translates a moment.js pattern into a datepicker pattern.
pub fn moment_to_datepicker(pattern: &str) -> String {
    cache::translate_cached(pattern, &MOMENT, &DATEPICKER)
}
