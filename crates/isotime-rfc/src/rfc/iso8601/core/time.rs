//! Timestamp wrapper type.

use std::fmt;
use std::ops::{Deref, Sub};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, DurationRound, FixedOffset, Local, TimeDelta, Timelike, Utc,
};

use crate::CalendarPolicy;
use crate::error::{RfcError, RfcResult};
use crate::rfc::iso8601::parse::{
    ParseError, format_canonical, format_compact, normalize_local, parse_timestamp,
    parse_timestamp_with,
};

/// A timestamp with a fixed UTC offset that parses the full ISO 8601 family
/// accepted by [`parse_timestamp`].
///
/// Dereferences to [`chrono::DateTime<FixedOffset>`] for field access
/// (`year()`, `hour()`, `offset()`, ...).
///
/// The default value is the Unix epoch at UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<FixedOffset>);

impl Time {
    #[must_use]
    pub const fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }

    /// Builds a timestamp from calendar fields in `offset`, rolling overflow
    /// forward (month 13 is January of the next year, second 60 is the next
    /// minute).
    ///
    /// ## Errors
    /// Returns [`RfcError::OutOfRange`] for a zero month or day, a nanosecond
    /// of one second or more, or a result chrono cannot represent.
    #[expect(
        clippy::too_many_arguments,
        reason = "Mirrors the calendar field list of a date constructor"
    )]
    pub fn date(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        offset: FixedOffset,
    ) -> RfcResult<Self> {
        normalize_local(year, month, day, hour, minute, second, nanosecond)
            .and_then(|local| local.and_local_timezone(offset).single())
            .map(Self)
            .ok_or_else(|| {
                RfcError::OutOfRange(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{nanosecond:09}{offset}"
                ))
            })
    }

    /// The current time at UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().fixed_offset())
    }

    /// The timestamp `seconds` and `nanoseconds` after the Unix epoch, at UTC.
    ///
    /// ## Errors
    /// Returns [`RfcError::OutOfRange`] if chrono cannot represent the result.
    pub fn unix(seconds: i64, nanoseconds: u32) -> RfcResult<Self> {
        DateTime::from_timestamp(seconds, nanoseconds)
            .map(|utc| Self(utc.fixed_offset()))
            .ok_or_else(|| RfcError::OutOfRange(format!("unix {seconds}.{nanoseconds:09}")))
    }

    /// Parses with an explicit calendar policy.
    ///
    /// ## Errors
    /// See [`parse_timestamp_with`].
    pub fn parse_with(input: &str, policy: CalendarPolicy) -> Result<Self, ParseError> {
        parse_timestamp_with(input, policy).map(Self)
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    #[must_use]
    pub const fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// ## Errors
    /// Returns [`RfcError::OutOfRange`] if the result overflows.
    pub fn add_delta(self, delta: TimeDelta) -> RfcResult<Self> {
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or_else(|| RfcError::OutOfRange(format!("{self} + {delta}")))
    }

    /// Adds whole years, months and days, keeping the time of day and
    /// offset. A day past the end of the resulting month rolls forward, so
    /// January 31 plus one month is March 3 (or March 2 in a leap year).
    ///
    /// ## Errors
    /// Returns [`RfcError::OutOfRange`] if the result overflows.
    pub fn add_date(self, years: i32, months: i32, days: i64) -> RfcResult<Self> {
        let out_of_range =
            || RfcError::OutOfRange(format!("{self} + {years}y {months}m {days}d"));

        let local = self.0.naive_local();
        let month_index = i64::from(local.year()) * 12
            + i64::from(local.month0())
            + i64::from(years) * 12
            + i64::from(months);
        let year = i32::try_from(month_index.div_euclid(12)).map_err(|_err| out_of_range())?;
        let month = u32::try_from(month_index.rem_euclid(12) + 1).map_err(|_err| out_of_range())?;

        let shifted = normalize_local(
            year,
            month,
            local.day(),
            local.hour(),
            local.minute(),
            local.second(),
            local.nanosecond(),
        )
        .and_then(|dt| dt.checked_add_signed(TimeDelta::try_days(days)?))
        .and_then(|dt| dt.and_local_timezone(*self.0.offset()).single())
        .ok_or_else(out_of_range)?;

        Ok(Self(shifted))
    }

    /// Named form of `self > other`.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Named form of `self < other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// The same instant at UTC.
    #[must_use]
    pub fn utc(self) -> Self {
        Self(self.0.with_timezone(&Utc).fixed_offset())
    }

    /// The same instant in the system's local offset.
    #[must_use]
    pub fn local(self) -> Self {
        Self(self.0.with_timezone(&Local).fixed_offset())
    }

    /// The same instant in `offset`.
    #[must_use]
    pub fn in_offset(self, offset: FixedOffset) -> Self {
        Self(self.0.with_timezone(&offset))
    }

    /// The same instant in the offset `zone` observes at that instant.
    #[must_use]
    pub fn in_zone(self, zone: chrono_tz::Tz) -> Self {
        Self(self.0.with_timezone(&zone).fixed_offset())
    }

    /// Rounds to the nearest multiple of `granularity`; halfway values round
    /// up.
    ///
    /// ## Errors
    /// Returns [`RfcError::Rounding`] if `granularity` is not positive or the
    /// timestamp is out of range for rounding.
    pub fn round(self, granularity: TimeDelta) -> RfcResult<Self> {
        Ok(Self(self.0.duration_round(granularity)?))
    }

    /// Rounds down to a multiple of `granularity`.
    ///
    /// ## Errors
    /// See [`Time::round`].
    pub fn truncate(self, granularity: TimeDelta) -> RfcResult<Self> {
        Ok(Self(self.0.duration_trunc(granularity)?))
    }

    /// Renders `YYYYMMDDTHHMMSSZ` at UTC.
    #[must_use]
    pub fn to_compact(self) -> String {
        format_compact(&self.0)
    }

    /// Replaces `self` from a raw structured-document literal.
    ///
    /// `null` leaves the value unchanged. A single- or double-quoted literal
    /// has its quotes stripped and the inner text parsed.
    ///
    /// ## Errors
    /// Returns [`RfcError::NotAStringLiteral`] for any other literal, or the
    /// parse error for quoted text that is not a timestamp.
    pub fn unmarshal_literal(&mut self, raw: &str) -> RfcResult<()> {
        let raw = raw.trim();
        if raw == "null" {
            return Ok(());
        }

        let inner = ['"', '\'']
            .into_iter()
            .find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
            .ok_or_else(|| RfcError::NotAStringLiteral(raw.to_owned()))?;

        *self = inner.parse()?;
        Ok(())
    }
}

impl Default for Time {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }
}

impl Deref for Time {
    type Target = DateTime<FixedOffset>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<FixedOffset>> for Time {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime.fixed_offset())
    }
}

impl From<Time> for DateTime<FixedOffset> {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl Sub for Time {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0.signed_duration_since(rhs.0)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s).map(Self)
    }
}

impl TryFrom<&str> for Time {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_canonical(&self.0))
    }
}
