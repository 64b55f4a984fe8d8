use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;

/// Initialize the logging system.
///
/// `directive` wins over `RUST_LOG`; with neither, only warnings are shown so
/// the interactive session stays readable. An unparsable `directive` is
/// reported on stderr and skipped. Logs go to stderr.
pub fn init_logger(directive: Option<&str>) {
    let filter = directive
        .and_then(|d| match directive_filter(d) {
            Ok(filter) => Some(filter),
            Err(message) => {
                eprintln!("{message}");
                None
            }
        })
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn directive_filter(directive: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directive)
        .map_err(|e| format!("Ignoring invalid log filter '{directive}': {e}"))
}
