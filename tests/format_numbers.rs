use dtfmt::number::format_numeral;
use dtfmt::NumeralLocale;

#[test]
fn test_format_grouped_fixed_decimals() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(1234567.891, "0,0.00", us), "1,234,567.89");
    assert_eq!(format_numeral(999.999, "0,0.00", us), "1,000.00");
}

#[test]
fn test_format_optional_decimals() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(1234.5, "0,0.[00]", us), "1,234.5");
    assert_eq!(format_numeral(1234.0, "0,0.[00]", us), "1,234");
    assert_eq!(format_numeral(1234.567, "0,0.[00]", us), "1,234.57");
    assert_eq!(format_numeral(2.5, "0.0[0]", us), "2.5");
}

#[test]
fn test_format_currency() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(1234.5, "$ 0,0.00", us), "$ 1,234.50");
    assert_eq!(format_numeral(-42.0, "$0", us), "-$42");
}

#[test]
fn test_format_locale_delimiters() {
    let es = NumeralLocale::lookup("es");
    assert_eq!(format_numeral(1234.5, "$ 0,0.00", es), "€ 1.234,50");

    let de_ch = NumeralLocale::lookup("de-ch");
    assert_eq!(format_numeral(1234.5, "0,0", de_ch), "1'235");
}

#[test]
fn test_format_leading_zeros() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(7.0, "000", us), "007");
    assert_eq!(format_numeral(1234.0, "000", us), "1234");
}

#[test]
fn test_format_rounds_to_zero_without_sign() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(0.004, "0.00", us), "0.00");
    assert_eq!(format_numeral(-0.004, "0.00", us), "0.00");
    assert_eq!(format_numeral(-1.5, "0", us), "-2");
}

#[test]
fn test_format_special_values() {
    let us = NumeralLocale::us();
    assert_eq!(format_numeral(f64::NAN, "0,0", us), "NaN");
    assert_eq!(format_numeral(f64::INFINITY, "0,0", us), "Infinity");
}

#[test]
fn test_unknown_locale_is_us() {
    assert_eq!(NumeralLocale::lookup("zz"), NumeralLocale::us());
}
