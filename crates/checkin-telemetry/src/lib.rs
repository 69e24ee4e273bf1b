//! Logging for the check-in service
//!
//! Installs the global `tracing` subscriber. Every component logs through
//! `tracing`, so the request logger and the error normalizer share one sink.

use checkin_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter from config, falling back to the CLI-provided directive
///
/// An unparseable directive degrades to `info` rather than failing startup.
fn build_filter(config: Option<&TelemetryConfig>, log_filter: &str) -> EnvFilter {
    let directive = config.and_then(|c| c.filter.as_deref()).unwrap_or(log_filter);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<()> {
    let filter = build_filter(config, log_filter);
    let format = config.map(|c| c.format).unwrap_or_default();

    match format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
    }

    tracing::debug!(?format, "log subscriber installed");

    Ok(())
}
