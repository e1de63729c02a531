//! Calendar normalization shared by the parser and [`Time::date`](crate::rfc::iso8601::Time::date).

use chrono::{Days, Months, NaiveDate, NaiveDateTime, TimeDelta};

/// Builds a local date and time, rolling each field past the end of its unit
/// into the next one: month 13 is January of the following year, day 31 of
/// a 30-day month is the 1st of the next, second 60 is the next minute.
///
/// Returns `None` for a zero month or day, a nanosecond of one second or
/// more, or a result outside chrono's representable range.
pub(crate) fn normalize_local(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, 1, 1)?
        .checked_add_months(Months::new(month.checked_sub(1)?))?
        .checked_add_days(Days::new(u64::from(day.checked_sub(1)?)))?;

    let seconds = i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
    let time_of_day = TimeDelta::new(seconds, nanosecond)?;

    date.and_hms_opt(0, 0, 0)?.checked_add_signed(time_of_day)
}
