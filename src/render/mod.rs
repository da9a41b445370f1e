//! Result payload rendering
//!
//! Turns each cell of a payload into display text, splits header cells from
//! body cells, and emits the HTML tables the result viewer shows.

#[cfg(feature = "chrono")]
mod date;
mod html;

#[cfg(feature = "chrono")]
pub use date::{format_timestamp, timestamp_millis};
pub use html::{render_array, render_cell_table, render_row, render_table};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
#[cfg(feature = "chrono")]
use tracing::warn;

use crate::locale::NumeralLocale;
use crate::number::{format_numeral, legacy_to_numeral, numeral_locale};
use crate::payload::{CellKind, ResultPayload};

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([^>]+)>").expect("valid tag regex"));

/// Header and body values of a rendered payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub body: Vec<String>,
}

/// Display text of a single cell.
///
/// - TEXT and JSON: the text (or its header override) with HTML tags
///   replaced by spaces; a lone `-` becomes `&nbsp;`
/// - DATE: the timestamp rendered with the cell's datepicker pattern in UTC
/// - NUMBER: the number rendered with the cell's legacy pattern and locale
/// - LINK: an anchor opening in a new tab
///
/// Other kinds have no display text.
pub fn cell_value(cell: &ResultPayload) -> String {
    match cell.kind {
        CellKind::Text | CellKind::Json => text_value(cell),
        CellKind::Date => date_value(cell),
        CellKind::Number => number_value(cell),
        CellKind::Link => link_value(cell),
        _ => String::new(),
    }
}

/// Splits a payload into header and body values.
///
/// Cells flagged as headers are collected until the first row containing a
/// header ends; later header flags are treated as body cells. A payload that
/// is not an ARRAY yields a single body value.
pub fn split_results(result: &ResultPayload) -> ResultTable {
    let mut table = ResultTable::default();

    if result.kind != CellKind::Array {
        table.body.push(cell_value(result));
        return table;
    }

    let mut seen_header = false;
    let mut headers_done = false;
    for row in 0..result.rows {
        for col in 0..result.cols {
            let Some(cell) = result.cell(row, col) else {
                debug!(row, col, "array payload is missing a cell");
                continue;
            };
            let value = cell_value(cell);
            if cell.is_header && !headers_done {
                seen_header = true;
                table.header.push(value);
            } else {
                table.body.push(value);
            }
        }
        if seen_header {
            headers_done = true;
        }
    }

    table
}

/// Formats a number the way a plain JavaScript `String(n)` would.
///
/// Magnitudes at or above 1e21 or below 1e-6 use exponent notation
/// (`1e+21`, `1.5e-7`); everything else is written out in full.
pub fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{:e}", value);
        return match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => exponent,
        };
    }
    format!("{}", value)
}

fn text_value(cell: &ResultPayload) -> String {
    let text = cell
        .header_overrides
        .as_deref()
        .and_then(|overrides| overrides.first())
        .map(|o| o.header.as_str())
        .or(cell.text.as_deref())
        .unwrap_or_default();

    let text = if text.chars().count() == 1 {
        text.replacen('-', "&nbsp;", 1)
    } else {
        text.to_string()
    };

    HTML_TAG.replace_all(&text, " ").into_owned()
}

fn date_value(cell: &ResultPayload) -> String {
    let Some(number) = cell.number else {
        return String::new();
    };

    match &cell.display_format {
        #[cfg(feature = "chrono")]
        Some(format) => {
            match timestamp_millis(number).and_then(|ms| format_timestamp(ms, &format.pattern)) {
                Ok(text) => text,
                Err(err) => {
                    warn!(%err, pattern = %format.pattern, "date cell rendered as a plain number");
                    plain_number(number)
                }
            }
        }
        _ => plain_number(number),
    }
}

fn number_value(cell: &ResultPayload) -> String {
    let Some(number) = cell.number else {
        return String::new();
    };

    match &cell.display_format {
        Some(format) => {
            let locale = NumeralLocale::lookup(numeral_locale(
                format.locale.as_deref().unwrap_or("us"),
            ));
            let pattern = match legacy_to_numeral(&format.pattern) {
                pattern if pattern.is_empty() => "0,0".to_string(),
                pattern => pattern,
            };
            format_numeral(number, &pattern, locale)
        }
        None => plain_number(number),
    }
}

fn link_value(cell: &ResultPayload) -> String {
    let text = cell.text.as_deref().unwrap_or_default();
    let uri = cell.uri.as_deref().unwrap_or_default();
    format!(
        r#"<a target="_blank" href="{}" rel="nofollow" title="{}">{}</a>"#,
        uri, text, text
    )
}
