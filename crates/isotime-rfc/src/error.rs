use thiserror::Error;

use crate::rfc::iso8601::ParseError;

/// RFC parsing and conversion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Not a string literal: {0}")]
    NotAStringLiteral(String),

    #[error("Rounding error: {0}")]
    Rounding(#[from] chrono::RoundingError),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
