//! Numeral pattern rendering (grouping, fixed and optional decimals, currency)

use crate::locale::NumeralLocale;

/// Analysis of a numeral pattern's structure.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumeralAnalysis {
    /// Text between the `$` and the digits, if the pattern has a currency sign
    currency_gap: Option<String>,
    /// Whether the integer part uses a grouping separator
    has_thousands_separator: bool,
    /// Number of `0`s in the first integer group
    min_integer_digits: usize,
    /// Decimal places always shown
    fixed_decimals: usize,
    /// Decimal places shown only when non-zero
    optional_decimals: usize,
}

impl NumeralAnalysis {
    fn decimal_places(&self) -> usize {
        self.fixed_decimals + self.optional_decimals
    }
}

fn analyze_pattern(pattern: &str) -> NumeralAnalysis {
    let (currency_gap, body) = match pattern.strip_prefix('$') {
        Some(rest) => {
            let digits = rest.trim_start();
            let gap = &rest[..rest.len() - digits.len()];
            (Some(gap.to_string()), digits)
        }
        None => (None, pattern),
    };

    let (integer, decimals) = body.split_once('.').unwrap_or((body, ""));
    let (fixed, optional) = match decimals.split_once('[') {
        Some((fixed, optional)) => (fixed, optional.trim_end_matches(']')),
        None => (decimals, ""),
    };

    NumeralAnalysis {
        currency_gap,
        has_thousands_separator: integer.contains(','),
        min_integer_digits: integer.split(',').next().unwrap_or_default().matches('0').count(),
        fixed_decimals: fixed.matches('0').count(),
        optional_decimals: optional.matches('0').count(),
    }
}

/// Format a number with a numeral pattern such as `$ 0,0.[00]`.
///
/// Rounds half away from zero. Optional decimals drop their trailing zeros,
/// and the decimal separator too when nothing is left after it.
pub fn format_numeral(value: f64, pattern: &str, locale: &NumeralLocale) -> String {
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

    let analysis = analyze_pattern(pattern);
    let places = analysis.decimal_places();

    let scaled = (value.abs() * 10_f64.powi(places as i32)).round();
    let digits = format!("{:0>width$.0}", scaled, width = places + 1);
    let (integer_digits, decimal_digits) = digits.split_at(digits.len() - places);

    let integer_str = format_integer(
        integer_digits,
        analysis.min_integer_digits,
        analysis.has_thousands_separator,
        locale,
    );
    let decimal_str = format_decimal(decimal_digits, analysis.optional_decimals);

    let is_negative = value < 0.0 && digits.bytes().any(|b| b != b'0');
    build_result(&analysis, &integer_str, decimal_str, is_negative, locale)
}

/// Format the integer digits with zero padding and thousands separators.
fn format_integer(
    digits: &str,
    min_digits: usize,
    use_thousands: bool,
    locale: &NumeralLocale,
) -> String {
    let digits = digits.trim_start_matches('0');
    let padded = format!("{:0>width$}", digits, width = min_digits.max(1));

    if !use_thousands {
        return padded;
    }

    let mut result = String::with_capacity(padded.len() + padded.len() / 3);
    for (i, ch) in padded.chars().enumerate() {
        if i > 0 && (padded.len() - i) % 3 == 0 {
            result.push(locale.thousands_separator);
        }
        result.push(ch);
    }
    result
}

/// Drop up to `optional` trailing zeros.
fn format_decimal(digits: &str, optional: usize) -> &str {
    let mut end = digits.len();
    let keep = digits.len() - optional;
    while end > keep && digits.as_bytes()[end - 1] == b'0' {
        end -= 1;
    }
    &digits[..end]
}

/// Build the final result string with sign and currency prefix.
fn build_result(
    analysis: &NumeralAnalysis,
    integer_str: &str,
    decimal_str: &str,
    is_negative: bool,
    locale: &NumeralLocale,
) -> String {
    let mut result = String::new();

    if is_negative {
        result.push('-');
    }
    if let Some(gap) = &analysis.currency_gap {
        result.push_str(locale.currency_symbol);
        result.push_str(gap);
    }

    result.push_str(integer_str);
    if !decimal_str.is_empty() {
        result.push(locale.decimal_separator);
        result.push_str(decimal_str);
    }

    result
}
