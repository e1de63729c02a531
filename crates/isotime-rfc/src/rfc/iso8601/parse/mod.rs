//! ISO 8601 timestamp parsing.

mod error;
mod format;
mod normalize;
mod parser;
mod patterns;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use format::{format_canonical, format_compact};
pub use parser::{Parsed, parse_detailed, parse_timestamp, parse_timestamp_with};
pub use patterns::Layout;

pub(crate) use normalize::normalize_local;
