//! Output renderings for parsed timestamps.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use isotime_core::constants::COMPACT_FORMAT;

/// Renders `YYYYMMDDTHHMMSSZ` after converting to UTC. Sub-second precision
/// is dropped.
#[must_use]
pub fn format_compact<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    datetime.with_timezone(&Utc).format(COMPACT_FORMAT).to_string()
}

/// Renders RFC 3339 in the timestamp's own offset, with `Z` for a zero
/// offset and 0, 3, 6 or 9 fractional digits as needed.
#[must_use]
pub fn format_canonical(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
