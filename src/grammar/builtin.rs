//! Built-in dialect data.

use std::borrow::Cow;

use super::{contains_reserved, DateDialect, Escaped};

/// moment.js format tokens. Literals are quoted with `[...]`.
pub const MOMENT: DateDialect = DateDialect {
    name: "moment",
    spellings: [
        "D", "DD", "ddd", "dddd", "DDD", "DDDD", "M", "MM", "MMM", "MMMM", "YY", "YYYY", "A", "H",
        "HH", "h", "hh", "m", "mm", "s", "ss", "S", "SS", "SSS", "Z", "X",
    ],
    reserved: "MoDdeEwWYgGAaHhmsSzZX",
    escape: escape_moment,
    recognize: recognize_moment,
};

/// jQuery datepicker/timepicker format tokens. Literals are quoted with
/// `'...'`, a quote inside a quoted region is written `''`.
pub const DATEPICKER: DateDialect = DateDialect {
    name: "datepicker",
    spellings: [
        "d", "dd", "D", "DD", "o", "oo", "m", "mm", "M", "MM", "yy", "yyyy", "A", "H", "HH", "h",
        "hh", "n", "nn", "s", "ss", "S", "SS", "SSS", "Z", "@",
    ],
    reserved: "dDomMy@'AHhnsSZ",
    escape: escape_datepicker,
    recognize: recognize_datepicker,
};

/// chrono strftime specifiers. `%%` is a literal percent sign.
///
/// chrono has no one- or two-digit fraction specifier, so those kinds are
/// absent and translate to nothing.
pub const STRFTIME: DateDialect = DateDialect {
    name: "strftime",
    spellings: [
        "%-d", "%d", "%a", "%A", "%-j", "%j", "%-m", "%m", "%b", "%B", "%y", "%Y", "%p", "%-H",
        "%H", "%-I", "%I", "%-M", "%M", "%-S", "%S", "", "", "%3f", "%:z", "%s",
    ],
    reserved: "%",
    escape: escape_strftime,
    recognize: recognize_strftime,
};

/// The bracket-quoting dialect.
pub const GRAMMAR_A: DateDialect = MOMENT;

/// The quote-quoting dialect.
pub const GRAMMAR_B: DateDialect = DATEPICKER;

/// Brackets cannot appear inside a bracketed literal, so they are rewritten
/// to parentheses. This changes the literal's text.
fn escape_moment(literal: &str, reserved: &str) -> String {
    let literal = literal.replace('[', "(").replace(']', ")");
    if !contains_reserved(&literal, reserved) {
        return literal;
    }
    format!("[{}]", literal)
}

/// An unterminated `[` is not a quoted region.
fn recognize_moment(pattern: &str, index: usize) -> Option<Escaped<'_>> {
    let body = pattern.get(index..)?.strip_prefix('[')?;
    let end = body.find(']')?;
    Some(Escaped {
        value: Cow::Borrowed(&body[..end]),
        len: end + 2,
    })
}

fn escape_datepicker(literal: &str, reserved: &str) -> String {
    if !contains_reserved(literal, reserved) {
        return literal.to_string();
    }
    format!("'{}'", literal.replace('\'', "''"))
}

/// An unterminated quote runs to the end of the pattern.
fn recognize_datepicker(pattern: &str, index: usize) -> Option<Escaped<'_>> {
    let body = pattern.get(index..)?.strip_prefix('\'')?;

    let mut value = String::new();
    let mut consumed = body.len();
    let mut chars = body.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch != '\'' {
            value.push(ch);
            continue;
        }
        if let Some((_, '\'')) = chars.peek() {
            value.push('\'');
            chars.next();
            continue;
        }
        consumed = i + 1;
        break;
    }

    Some(Escaped {
        value: Cow::Owned(value),
        len: consumed + 1,
    })
}

fn escape_strftime(literal: &str, reserved: &str) -> String {
    if !contains_reserved(literal, reserved) {
        return literal.to_string();
    }
    literal.replace('%', "%%")
}

fn recognize_strftime(pattern: &str, index: usize) -> Option<Escaped<'_>> {
    if !pattern.get(index..)?.starts_with("%%") {
        return None;
    }
    Some(Escaped {
        value: Cow::Borrowed("%"),
        len: 2,
    })
}
