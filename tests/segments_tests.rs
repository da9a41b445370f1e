//! Tests for splitting patterns into segments.

use dtfmt::{segments, Segment, TokenKind, DATEPICKER, MOMENT, STRFTIME};

fn collect(pattern: &str, grammar: &dtfmt::DateDialect) -> Vec<Segment> {
    segments(pattern, grammar).collect()
}

fn lit(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

#[test]
fn test_segments_date_pattern() {
    assert_eq!(
        collect("dd/mm/yyyy", &DATEPICKER),
        vec![
            Segment::Token(TokenKind::DayOfMonthLong),
            lit("/"),
            Segment::Token(TokenKind::MonthOfYearLong),
            lit("/"),
            Segment::Token(TokenKind::YearLong),
        ]
    );
}

#[test]
fn test_segments_quoted_literal_merges_with_plain_text() {
    assert_eq!(
        collect("'at' HH", &DATEPICKER),
        vec![lit("at "), Segment::Token(TokenKind::Hour24Long)]
    );
}

#[test]
fn test_segments_adjacent_quoted_regions_merge() {
    assert_eq!(collect("[a]b[c]", &MOMENT), vec![lit("abc")]);
}

#[test]
fn test_segments_quoted_region_is_not_scanned() {
    assert_eq!(
        collect("[YYYY]YYYY", &MOMENT),
        vec![lit("YYYY"), Segment::Token(TokenKind::YearLong)]
    );
}

#[test]
fn test_segments_odd_run_of_letters() {
    assert_eq!(
        collect("yyy", &DATEPICKER),
        vec![Segment::Token(TokenKind::YearShort), lit("y")]
    );
}

#[test]
fn test_segments_empty_quotes() {
    assert_eq!(collect("''", &DATEPICKER), vec![]);
}

#[test]
fn test_segments_strftime() {
    assert_eq!(
        collect("%-d%%%B", &STRFTIME),
        vec![
            Segment::Token(TokenKind::DayOfMonthShort),
            lit("%"),
            Segment::Token(TokenKind::MonthNameLong),
        ]
    );
}

#[test]
fn test_segments_stray_percent() {
    assert_eq!(
        collect("%q%Y", &STRFTIME),
        vec![lit("%q"), Segment::Token(TokenKind::YearLong)]
    );
}
