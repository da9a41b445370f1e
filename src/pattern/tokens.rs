//! Token kinds shared by every date pattern dialect.

/// A semantic date/time component.
///
/// The set is closed: every dialect spells (or omits) each of these kinds,
/// which is what lets a pattern move from one dialect to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    DayOfMonthShort,
    DayOfMonthLong,
    DayOfWeekShort,
    DayOfWeekLong,
    DayOfYearShort,
    DayOfYearLong,
    MonthOfYearShort,
    MonthOfYearLong,
    MonthNameShort,
    MonthNameLong,
    YearShort,
    YearLong,
    AmPm,
    Hour24Short,
    Hour24Long,
    Hour12Short,
    Hour12Long,
    MinuteShort,
    MinuteLong,
    SecondShort,
    SecondLong,
    FractionalSecond1,
    FractionalSecond2,
    FractionalSecond3,
    TimeZone,
    UnixTimestamp,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 26;

    /// Every kind, in declaration order. Token matching scans in this order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::DayOfMonthShort,
        TokenKind::DayOfMonthLong,
        TokenKind::DayOfWeekShort,
        TokenKind::DayOfWeekLong,
        TokenKind::DayOfYearShort,
        TokenKind::DayOfYearLong,
        TokenKind::MonthOfYearShort,
        TokenKind::MonthOfYearLong,
        TokenKind::MonthNameShort,
        TokenKind::MonthNameLong,
        TokenKind::YearShort,
        TokenKind::YearLong,
        TokenKind::AmPm,
        TokenKind::Hour24Short,
        TokenKind::Hour24Long,
        TokenKind::Hour12Short,
        TokenKind::Hour12Long,
        TokenKind::MinuteShort,
        TokenKind::MinuteLong,
        TokenKind::SecondShort,
        TokenKind::SecondLong,
        TokenKind::FractionalSecond1,
        TokenKind::FractionalSecond2,
        TokenKind::FractionalSecond3,
        TokenKind::TimeZone,
        TokenKind::UnixTimestamp,
    ];

    /// Position of this kind in [`TokenKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A piece of a pattern: either literal text or a recognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text to emit verbatim, already decoded from the source escape syntax.
    Literal(String),
    Token(TokenKind),
}
