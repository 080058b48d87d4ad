/// Diagnostic logging to stderr via `tracing-subscriber`.
use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used with `--debug`: our own events at debug, dependencies at info.
const DEBUG_DIRECTIVES: &str = "info,cvdcli=debug";

/// Filter used when neither `--debug` nor `RUST_LOG` is set.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber. Call once, before any command runs.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::try_new(DEBUG_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
    }
    .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
