use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// How out-of-range calendar values (e.g. February 30) are handled once a
/// timestamp has passed the lexical stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarPolicy {
    /// Roll overflowing days and seconds forward into the next unit.
    #[default]
    Normalize,
    /// Reject days that do not exist in the given month.
    Strict,
}

impl CalendarPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for CalendarPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normalize" => Ok(Self::Normalize),
            "strict" => Ok(Self::Strict),
            other => Err(CoreError::InvalidInput(format!(
                "unknown calendar policy: {other}"
            ))),
        }
    }
}

/// Rendering used when printing parsed timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// RFC 3339 in the parsed offset, `Z` for a zero offset.
    #[default]
    Canonical,
    /// `YYYYMMDDTHHMMSSZ` after conversion to UTC.
    Compact,
    /// RFC 3339 after conversion to UTC.
    Utc,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Compact => "compact",
            Self::Utc => "utc",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "compact" => Ok(Self::Compact),
            "utc" => Ok(Self::Utc),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_round_trips_through_str() {
        for policy in [CalendarPolicy::Normalize, CalendarPolicy::Strict] {
            assert_eq!(policy.as_str().parse::<CalendarPolicy>().unwrap(), policy);
        }
        assert_eq!(
            "STRICT".parse::<CalendarPolicy>().unwrap(),
            CalendarPolicy::Strict
        );
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let err = "iso".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(err.to_string().contains("iso"));
    }

    #[test]
    fn defaults() {
        assert_eq!(CalendarPolicy::default(), CalendarPolicy::Normalize);
        assert_eq!(OutputFormat::default(), OutputFormat::Canonical);
        assert_eq!(OutputFormat::Compact.to_string(), "compact");
    }
}
