use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use isotime_app::render::run;
use isotime_core::config::load_config;
use isotime_core::types::{CalendarPolicy, OutputFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Parse ISO 8601 / RFC 3339 timestamps and print them in a normalized form.
#[derive(Debug, Parser)]
#[command(name = "isotime", version)]
struct Cli {
    /// Timestamps to parse. Read one per line from stdin when omitted.
    timestamps: Vec<String>,

    /// Output format: canonical, compact or utc. Defaults to `output.format`.
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Reject days that do not exist in their month instead of rolling over.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.as_str()));
    match filter {
        Ok(filter) => {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, level = %config.logging.level, "Invalid log level in config, keeping info");
        }
    }

    let policy = if cli.strict {
        CalendarPolicy::Strict
    } else {
        config.parse.policy
    };
    let format = cli.format.unwrap_or(config.output.format);

    tracing::debug!(%policy, %format, "Rendering timestamps");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = if cli.timestamps.is_empty() {
        let lines = std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        run(lines, policy, format, &mut out)?
    } else {
        run(cli.timestamps, policy, format, &mut out)?
    };

    if summary.failed > 0 {
        tracing::error!(failed = summary.failed, "Some timestamps could not be parsed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
