//! Shared building blocks for the isotime workspace: configuration,
//! error types and output format constants.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
