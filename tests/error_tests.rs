use dtfmt::FormatError;

#[test]
fn test_format_error_display() {
    let err = FormatError::TimestampOutOfRange { millis: 42 };
    let msg = format!("{}", err);
    assert!(msg.contains("42 ms"));
}

#[test]
fn test_non_finite_timestamp_display() {
    let err = FormatError::NonFiniteTimestamp;
    assert_eq!(err.to_string(), "timestamp is not a finite number");
}
