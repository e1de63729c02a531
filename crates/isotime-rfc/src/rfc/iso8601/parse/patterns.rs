//! Lexical layouts accepted by the ISO 8601 parser.
//!
//! Each layout is a fully anchored regular expression. The date segment uses
//! either every `-` separator or none, and the time segment either every `:`
//! separator or none, so a partially separated string such as
//! `1900-1231T00:10:20Z` matches no layout at all.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

const YEAR: &str = "(?P<year>[0-9]{4})";
const MONTH: &str = "(?P<month>0[1-9]|1[0-2])";
const DAY: &str = "(?P<day>0[1-9]|[12][0-9]|3[01])";
const HOUR: &str = "(?P<hour>[01][0-9]|2[0-3])";
const MINUTE: &str = "(?P<minute>[0-5][0-9])";
// 60 and 61 admit leap-second notation.
const SECOND: &str = "(?P<second>[0-5][0-9]|6[01])";
const FRACTION: &str = "(?:[.,](?P<fraction>[0-9]{1,9}))?";
const DATE_TIME_SEPARATOR: &str = "[Tt ]";
const OFFSET: &str = "(?P<offset>Z|(?P<sign>[-+])(?P<offset_hour>[01][0-9]):?(?P<offset_minute>[0-5][0-9])?)";

const EXTENDED_DATE: &str = const_str::concat!(YEAR, "-", MONTH, "-", DAY);
const BASIC_DATE: &str = const_str::concat!(YEAR, MONTH, DAY);
const EXTENDED_TIME: &str = const_str::concat!(HOUR, ":", MINUTE, ":", SECOND, FRACTION, OFFSET);
const BASIC_TIME: &str = const_str::concat!(HOUR, MINUTE, SECOND, FRACTION, OFFSET);

/// One of the six accepted textual layouts, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `YYYY-MM-DDTHH:MM:SS[.f]±HH:MM`
    ExtendedDateTime,
    /// `YYYYMMDDTHHMMSS[.f]±HHMM`
    BasicDateTime,
    /// `YYYY-MM-DDTHHMMSS[.f]±HHMM`
    ExtendedDateBasicTime,
    /// `YYYYMMDDTHH:MM:SS[.f]±HH:MM`
    BasicDateExtendedTime,
    /// `YYYY-MM-DD`
    ExtendedDate,
    /// `YYYYMMDD`
    BasicDate,
}

impl Layout {
    /// All layouts in the order they are tried.
    pub const ALL: [Self; 6] = [
        Self::ExtendedDateTime,
        Self::BasicDateTime,
        Self::ExtendedDateBasicTime,
        Self::BasicDateExtendedTime,
        Self::ExtendedDate,
        Self::BasicDate,
    ];

    /// Returns the anchored regular expression source for this layout.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::ExtendedDateTime => {
                const_str::concat!("^", EXTENDED_DATE, DATE_TIME_SEPARATOR, EXTENDED_TIME, "$")
            }
            Self::BasicDateTime => {
                const_str::concat!("^", BASIC_DATE, DATE_TIME_SEPARATOR, BASIC_TIME, "$")
            }
            Self::ExtendedDateBasicTime => {
                const_str::concat!("^", EXTENDED_DATE, DATE_TIME_SEPARATOR, BASIC_TIME, "$")
            }
            Self::BasicDateExtendedTime => {
                const_str::concat!("^", BASIC_DATE, DATE_TIME_SEPARATOR, EXTENDED_TIME, "$")
            }
            Self::ExtendedDate => const_str::concat!("^", EXTENDED_DATE, "$"),
            Self::BasicDate => const_str::concat!("^", BASIC_DATE, "$"),
        }
    }

    /// Whether the layout carries a time of day and offset.
    #[must_use]
    pub const fn has_time(self) -> bool {
        !matches!(self, Self::ExtendedDate | Self::BasicDate)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtendedDateTime => "extended-date-time",
            Self::BasicDateTime => "basic-date-time",
            Self::ExtendedDateBasicTime => "extended-date-basic-time",
            Self::BasicDateExtendedTime => "basic-date-extended-time",
            Self::ExtendedDate => "extended-date",
            Self::BasicDate => "basic-date",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled layout.
#[derive(Debug)]
pub(crate) struct LayoutPattern {
    pub layout: Layout,
    pub regex: Regex,
}

/// Compiled layouts, built once on first use.
pub(crate) static LAYOUT_PATTERNS: LazyLock<[LayoutPattern; 6]> = LazyLock::new(|| {
    Layout::ALL.map(|layout| LayoutPattern {
        layout,
        regex: compile(layout),
    })
});

#[expect(
    clippy::expect_used,
    reason = "Layout patterns are compile-time constants exercised by the test suite"
)]
fn compile(layout: Layout) -> Regex {
    Regex::new(layout.pattern()).expect("ISO 8601 layout pattern must compile")
}
