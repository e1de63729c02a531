//! ISO 8601 / RFC 3339 timestamp parsing and a serde-aware timestamp wrapper.

pub mod error;
pub mod rfc;

pub use isotime_core::types::CalendarPolicy;
