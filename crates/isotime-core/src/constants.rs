//! `strftime` templates shared across crates.

/// Basic (no separator) calendar date.
pub const BASIC_DATE_FORMAT: &str = "%Y%m%d";
/// Basic (no separator) time of day.
pub const BASIC_TIME_FORMAT: &str = "%H%M%S";

/// Most compact ISO 8601 rendering, `YYYYMMDDTHHMMSSZ`.
///
/// The value being formatted must already be in UTC; the trailing `Z` is a
/// literal, not an offset directive.
pub const COMPACT_FORMAT: &str = const_str::concat!(BASIC_DATE_FORMAT, "T", BASIC_TIME_FORMAT, "Z");

/// Prefix for environment variable overrides (`ISOTIME_LOGGING_LEVEL`, ...).
pub const ENV_PREFIX: &str = "ISOTIME";

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "isotime.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_format_template() {
        assert_eq!(COMPACT_FORMAT, "%Y%m%dT%H%M%SZ");
    }
}
