//! Legacy number patterns and their numeral equivalents.
//!
//! Stored display formats use a US-style pattern language:
//! - `0` a digit
//! - `#` a digit, absent when zero
//! - `.` the decimal separator, `,` the grouping separator
//! - `$` the currency sign
//!
//! Rendering uses numeral-style patterns instead (`0,0.00`, `$ 0,0.[00]`),
//! so stored patterns are rewritten before use. Stored locale codes are
//! mapped the same way.

mod format;

pub use format::format_numeral;

/// Rewrites a legacy number pattern into a numeral pattern.
///
/// Common patterns come from a fixed table. Anything else is rewritten
/// piecewise: optional decimals become a bracketed `[0...]` run, and the
/// comma-separated integer groups are normalized. A leading group made only
/// of `#` carries no information and is dropped.
pub fn legacy_to_numeral(format: &str) -> String {
    if let Some(known) = known_pattern(format) {
        return known.to_string();
    }

    let mut parts: Vec<String> = format.split('.').map(str::to_string).collect();

    if let Some(decimals) = parts.get_mut(1) {
        if decimals.contains('#') {
            *decimals = optional_decimals(decimals);
        }
    }

    if parts[0].contains(',') {
        let mut groups: Vec<String> = parts[0]
            .split(',')
            .map(|group| normalize_group(group).unwrap_or(group).to_string())
            .collect();
        normalize_leading_group(&mut groups);
        parts[0] = groups.join(",");
    }

    parts.join(".")
}

/// Maps a stored locale code to a numeral locale code. Unknown codes are US
/// English.
pub fn numeral_locale(code: &str) -> &'static str {
    match code {
        "us" => "us",
        "es" => "es",
        "th" => "th",
        "de" => "de",
        "fr" => "fr",
        "fi" => "fi",
        "ru" => "ru",
        "jp" => "ja",
        "cn" => "chs",
        "au" => "en-au",
        "ca" => "fr-ca",
        "gb" => "en-gb",
        "dk" => "da-dk",
        "br" => "pt-br",
        "cz" => "cs",
        "ch" => "de-ch",
        _ => "us",
    }
}

fn known_pattern(format: &str) -> Option<&'static str> {
    match format {
        "0,000" | "#,###" => Some("0,0"),
        "$ 0,000" | "$ #,###" => Some("$ 0,0"),
        "0,000.00" => Some("0,0.00"),
        "$ 0,000.00" => Some("$ 0,0.00"),
        "#,###.##" => Some("0,0.[00]"),
        "$ #,###.##" => Some("$ 0,0.[00]"),
        _ => None,
    }
}

/// `##0#` becomes `[00]0`: the first `#` opens the optional run and the last
/// digit closes it.
fn optional_decimals(decimals: &str) -> String {
    let mut rewritten = decimals.replacen('#', "[0", 1).replace('#', "0");
    if let Some(last) = rewritten.rfind('0') {
        rewritten.replace_range(last..last + 1, "0]");
    }
    rewritten
}

/// Normalizes one three-digit integer group, with or without a currency
/// prefix.
fn normalize_group(group: &str) -> Option<&'static str> {
    let normalized = match group {
        "###" | "##0" => "0",
        "#00" | "#0#" => "00",
        "000" | "0##" | "00#" | "0#0" => "000",

        "$ ###" | "$ ##0" => "$ 0",
        "$ #00" | "$ #0#" => "$ 00",
        "$ 000" | "$ 0##" | "$ 00#" | "$ 0#0" => "$ 000",

        "$###" | "$##0" => "$0",
        "$#00" | "$#0#" => "$00",
        "$000" | "$0##" | "$00#" | "$0#0" => "$000",

        _ => return None,
    };
    Some(normalized)
}

fn normalize_leading_group(groups: &mut Vec<String>) {
    match groups[0].as_str() {
        "#" | "##" => {
            if groups.len() == 1 {
                groups[0] = "0".to_string();
            } else {
                groups.remove(0);
            }
        }
        "0" | "0#" | "#0" => groups[0] = "0".to_string(),
        "$ #" | "$ ##" => move_currency_prefix(groups, "$ "),
        "$ 0" | "$ 0#" | "$ #0" => groups[0] = "$ 0".to_string(),
        "$#" | "$##" => move_currency_prefix(groups, "$"),
        "$0" | "$0#" | "$#0" => groups[0] = "$0".to_string(),
        _ => {}
    }
}

/// Drops a leading `$ #`-style group and puts its currency prefix on the next
/// group.
fn move_currency_prefix(groups: &mut Vec<String>, prefix: &str) {
    groups.remove(0);
    match groups.first_mut() {
        Some(first) => first.insert_str(0, prefix),
        None => groups.push(prefix.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_decimals() {
        assert_eq!(optional_decimals("##"), "[00]");
        assert_eq!(optional_decimals("0##"), "0[00]");
        assert_eq!(optional_decimals("#0"), "[00]");
    }

    #[test]
    fn test_normalize_group() {
        assert_eq!(normalize_group("#0#"), Some("00"));
        assert_eq!(normalize_group("$ 0##"), Some("$ 000"));
        assert_eq!(normalize_group("12"), None);
    }
}
