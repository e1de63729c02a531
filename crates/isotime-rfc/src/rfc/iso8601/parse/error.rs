//! ISO 8601 parse error types.

use std::fmt;

/// Result type for ISO 8601 parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing an ISO 8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The offending input, verbatim.
    pub input: String,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.to_owned(),
            message: message.into(),
        }
    }

    /// Creates an error for input that matches none of the accepted layouts.
    #[must_use]
    pub fn lexical_mismatch(input: &str) -> Self {
        Self::new(
            ParseErrorKind::LexicalMismatch,
            input,
            format!("invalid ISO 8601 timestamp: {input:?}"),
        )
    }

    /// Creates an error for a day that does not exist in its month.
    #[must_use]
    pub fn calendar_overflow(input: &str, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::CalendarOverflow, input, message)
    }

    /// Creates an error for a field that passed the lexical stage but could
    /// not be converted.
    #[must_use]
    pub fn internal(input: &str, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Internal, input, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input matches none of the accepted lexical layouts.
    LexicalMismatch,
    /// Day is outside the month under the strict calendar policy.
    CalendarOverflow,
    /// A lexically valid field failed conversion.
    Internal,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexicalMismatch => write!(f, "lexical mismatch"),
            Self::CalendarOverflow => write!(f, "calendar overflow"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_mismatch_keeps_input() {
        let err = ParseError::lexical_mismatch("1900-1231");
        assert_eq!(err.kind, ParseErrorKind::LexicalMismatch);
        assert_eq!(err.input, "1900-1231");
        assert_eq!(
            err.to_string(),
            "lexical mismatch: invalid ISO 8601 timestamp: \"1900-1231\""
        );
    }

    #[test]
    fn calendar_overflow_display() {
        let err = ParseError::calendar_overflow("2021-02-30", "day 30 out of range");
        assert_eq!(err.to_string(), "calendar overflow: day 30 out of range");
    }
}
