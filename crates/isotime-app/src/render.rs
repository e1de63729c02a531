//! Parsing and rendering of command-line input.

use std::io::Write;

use isotime_core::types::{CalendarPolicy, OutputFormat};
use isotime_rfc::rfc::iso8601::Time;

/// Outcome of rendering a batch of inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub failed: usize,
}

/// Renders a parsed timestamp in `format`.
#[must_use]
pub fn render(time: Time, format: OutputFormat) -> String {
    match format {
        OutputFormat::Canonical => time.to_string(),
        OutputFormat::Compact => time.to_compact(),
        OutputFormat::Utc => time.utc().to_string(),
    }
}

/// Parses each non-blank input and writes one rendered line per success to
/// `out`. Failures are logged and counted, never written.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
#[tracing::instrument(skip(inputs, out))]
pub fn run<I, S, W>(
    inputs: I,
    policy: CalendarPolicy,
    format: OutputFormat,
    out: &mut W,
) -> std::io::Result<Summary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut summary = Summary::default();

    for input in inputs {
        let input = input.as_ref().trim();
        if input.is_empty() {
            continue;
        }

        match Time::parse_with(input, policy) {
            Ok(time) => {
                writeln!(out, "{}", render(time, format))?;
                summary.rendered += 1;
            }
            Err(err) => {
                tracing::error!(error = %err, input, "Failed to parse timestamp");
                summary.failed += 1;
            }
        }
    }

    tracing::debug!(?summary, "Finished rendering");
    Ok(summary)
}
