//! Tests for rewriting legacy number patterns and locale codes.

use dtfmt::number::{legacy_to_numeral, numeral_locale};

#[test]
fn test_known_patterns() {
    assert_eq!(legacy_to_numeral("0,000"), "0,0");
    assert_eq!(legacy_to_numeral("#,###"), "0,0");
    assert_eq!(legacy_to_numeral("$ 0,000"), "$ 0,0");
    assert_eq!(legacy_to_numeral("$ #,###"), "$ 0,0");
    assert_eq!(legacy_to_numeral("0,000.00"), "0,0.00");
    assert_eq!(legacy_to_numeral("$ 0,000.00"), "$ 0,0.00");
    assert_eq!(legacy_to_numeral("#,###.##"), "0,0.[00]");
    assert_eq!(legacy_to_numeral("$ #,###.##"), "$ 0,0.[00]");
}

#[test]
fn test_optional_decimals() {
    assert_eq!(legacy_to_numeral("##0.##"), "##0.[00]");
    assert_eq!(legacy_to_numeral("0.0#"), "0.0[0]");
    assert_eq!(legacy_to_numeral("0.00"), "0.00");
}

#[test]
fn test_grouped_integer_parts() {
    assert_eq!(legacy_to_numeral("#,###,###"), "0,0");
    assert_eq!(legacy_to_numeral("0,000,000.0#"), "0,000,000.0[0]");
    assert_eq!(legacy_to_numeral("#0,#00"), "0,00");
}

#[test]
fn test_leading_hash_group_is_dropped() {
    // Only the last group survives when the first one is all '#'.
    assert_eq!(legacy_to_numeral("#,##0.00"), "0.00");
}

#[test]
fn test_currency_prefix_moves_to_next_group() {
    assert_eq!(legacy_to_numeral("$ #,##0"), "$ 0");
    assert_eq!(legacy_to_numeral("$#,###"), "$0");
    assert_eq!(legacy_to_numeral("$ 0#,000"), "$ 0,000");
    assert_eq!(legacy_to_numeral("$0,###.##"), "$0,0.[00]");
}

#[test]
fn test_ungrouped_patterns_pass_through() {
    assert_eq!(legacy_to_numeral("0"), "0");
    assert_eq!(legacy_to_numeral(""), "");
    assert_eq!(legacy_to_numeral("$ 0.00"), "$ 0.00");
}

#[test]
fn test_numeral_locale_mapping() {
    assert_eq!(numeral_locale("us"), "us");
    assert_eq!(numeral_locale("es"), "es");
    assert_eq!(numeral_locale("jp"), "ja");
    assert_eq!(numeral_locale("cn"), "chs");
    assert_eq!(numeral_locale("au"), "en-au");
    assert_eq!(numeral_locale("ca"), "fr-ca");
    assert_eq!(numeral_locale("gb"), "en-gb");
    assert_eq!(numeral_locale("dk"), "da-dk");
    assert_eq!(numeral_locale("br"), "pt-br");
    assert_eq!(numeral_locale("cz"), "cs");
    assert_eq!(numeral_locale("ch"), "de-ch");
}

#[test]
fn test_numeral_locale_unknown_is_us() {
    assert_eq!(numeral_locale("xx"), "us");
    assert_eq!(numeral_locale(""), "us");
    assert_eq!(numeral_locale("ES"), "us");
}
