//! Field extraction and normalization for matched ISO 8601 layouts.

use chrono::{DateTime, FixedOffset, NaiveDate};
use regex_lite::Captures;

use super::error::{ParseError, ParseResult};
use super::normalize::normalize_local;
use super::patterns::{LAYOUT_PATTERNS, Layout};
use crate::CalendarPolicy;

/// Nanosecond digits in a fully padded fraction.
const FRACTION_DIGITS: usize = 9;

/// A successfully parsed timestamp together with the layout that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub layout: Layout,
    pub datetime: DateTime<FixedOffset>,
}

/// Parses an ISO 8601 / RFC 3339 timestamp, rolling calendar overflow forward.
///
/// Accepts extended (`1900-12-31T00:10:20Z`) and basic (`19001231T001020Z`)
/// date and time segments in any combination, `T`, `t` or a space between
/// them, up to nine fractional digits after `.` or `,`, and a `Z`, `±HH:MM`,
/// `±HHMM` or `±HH` offset. Date-only input is midnight UTC.
///
/// ## Errors
/// Returns [`ParseErrorKind::LexicalMismatch`](super::ParseErrorKind) if the
/// input matches none of the accepted layouts.
pub fn parse_timestamp(input: &str) -> ParseResult<DateTime<FixedOffset>> {
    parse_timestamp_with(input, CalendarPolicy::Normalize)
}

/// Parses a timestamp using the given calendar policy.
///
/// ## Errors
/// Returns an error if the input matches no layout, or if the policy is
/// [`CalendarPolicy::Strict`] and the day does not exist in its month.
pub fn parse_timestamp_with(
    input: &str,
    policy: CalendarPolicy,
) -> ParseResult<DateTime<FixedOffset>> {
    parse_detailed(input, policy).map(|parsed| parsed.datetime)
}

/// Parses a timestamp and reports which layout matched.
///
/// ## Errors
/// See [`parse_timestamp_with`].
#[tracing::instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn parse_detailed(input: &str, policy: CalendarPolicy) -> ParseResult<Parsed> {
    for pattern in LAYOUT_PATTERNS.iter() {
        let Some(captures) = pattern.regex.captures(input) else {
            continue;
        };

        tracing::trace!(layout = %pattern.layout, "Matched ISO 8601 layout");

        let fields = Fields::extract(input, pattern.layout, &captures)?;
        let datetime = fields.to_datetime(input, policy)?;
        return Ok(Parsed {
            layout: pattern.layout,
            datetime,
        });
    }

    tracing::debug!(input, "Input matches no ISO 8601 layout");
    Err(ParseError::lexical_mismatch(input))
}

/// Offset as written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offset {
    Utc,
    Fixed {
        negative: bool,
        hours: i32,
        minutes: i32,
    },
}

/// Numeric fields of one matched layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    offset: Offset,
}

impl Fields {
    fn extract(input: &str, layout: Layout, captures: &Captures<'_>) -> ParseResult<Self> {
        let year = number(input, captures, "year")?;
        let month = number(input, captures, "month")?;
        let day = number(input, captures, "day")?;

        if !layout.has_time() {
            return Ok(Self {
                year,
                month,
                day,
                hour: 0,
                minute: 0,
                second: 0,
                nanosecond: 0,
                offset: Offset::Utc,
            });
        }

        let nanosecond = match captures.name("fraction") {
            Some(fraction) if !fraction.as_str().is_empty() => {
                let padded = format!("{:0<FRACTION_DIGITS$}", fraction.as_str());
                digits(input, "fraction", &padded)?
            }
            _ => 0,
        };

        let offset = if let Some(sign) = captures.name("sign") {
            let negative = sign.as_str() == "-";
            let hours = number(input, captures, "offset_hour")?;
            let minutes = match captures.name("offset_minute") {
                Some(m) => digits(input, "offset_minute", m.as_str())?,
                None => 0,
            };
            Offset::Fixed {
                negative,
                hours,
                minutes,
            }
        } else {
            Offset::Utc
        };

        Ok(Self {
            year,
            month,
            day,
            hour: number(input, captures, "hour")?,
            minute: number(input, captures, "minute")?,
            second: number(input, captures, "second")?,
            nanosecond,
            offset,
        })
    }

    fn fixed_offset(self, input: &str) -> ParseResult<FixedOffset> {
        let seconds = match self.offset {
            Offset::Utc => 0,
            Offset::Fixed {
                negative,
                hours,
                minutes,
            } => {
                let magnitude = hours * 3600 + minutes * 60;
                if negative { -magnitude } else { magnitude }
            }
        };

        FixedOffset::east_opt(seconds)
            .ok_or_else(|| ParseError::internal(input, format!("offset {seconds}s out of range")))
    }

    /// Builds the timestamp, rolling values past the end of their unit into
    /// the next one (day 31 of a 30-day month into the next month, second 60
    /// into the next minute). Under [`CalendarPolicy::Strict`] a day past the
    /// end of its month is rejected instead; leap-second notation always rolls.
    fn to_datetime(
        self,
        input: &str,
        policy: CalendarPolicy,
    ) -> ParseResult<DateTime<FixedOffset>> {
        let offset = self.fixed_offset(input)?;

        if policy == CalendarPolicy::Strict
            && NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none()
        {
            return Err(ParseError::calendar_overflow(
                input,
                format!(
                    "day {} does not exist in {:04}-{:02}",
                    self.day, self.year, self.month
                ),
            ));
        }

        let overflow = || ParseError::internal(input, "timestamp out of representable range");

        let local = normalize_local(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
        )
        .ok_or_else(overflow)?;

        local.and_local_timezone(offset).single().ok_or_else(overflow)
    }
}

fn number<T: std::str::FromStr>(
    input: &str,
    captures: &Captures<'_>,
    group: &str,
) -> ParseResult<T> {
    let text = captures
        .name(group)
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::internal(input, format!("missing {group} field")))?;
    digits(input, group, text)
}

fn digits<T: std::str::FromStr>(input: &str, group: &str, text: &str) -> ParseResult<T> {
    text.parse::<T>().map_err(|_err| {
        ParseError::internal(
            input,
            format!("failed to convert {group} field {text:?} to an integer"),
        )
    })
}
