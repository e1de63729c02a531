//! ISO 8601 / RFC 3339 timestamps.
//!
//! ## Usage
//!
//! ```rust
//! use isotime_rfc::rfc::iso8601::{Time, parse_timestamp};
//!
//! let ts = parse_timestamp("19001231T001020Z").unwrap();
//! assert_eq!(ts.to_rfc3339(), "1900-12-31T00:10:20+00:00");
//!
//! let time: Time = "2020-02-17T11:39:27.658731-02:30".parse().unwrap();
//! assert_eq!(time.utc().to_string(), "2020-02-17T14:09:27.658731Z");
//! ```
//!
//! ## Features
//!
//! - Extended (`1900-12-31T00:10:20Z`) and basic (`19001231T001020Z`) date
//!   and time segments, in any combination
//! - `T`, `t` or a space between date and time
//! - Up to nine fractional second digits after `.` or `,`
//! - `Z`, `±HH:MM`, `±HHMM` and `±HH` offsets
//! - Leap-second notation (`:60`, `:61`) rolled into the next minute
//! - A serde-aware [`Time`] wrapper

mod core;
mod parse;

pub use self::core::Time;
pub use parse::{
    Layout, ParseError, ParseErrorKind, ParseResult, Parsed, format_canonical, format_compact,
    parse_detailed, parse_timestamp, parse_timestamp_with,
};
