use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::BenchPlotError;

/// Install the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) -> Result<(), BenchPlotError> {
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(default_level),
    }
    .map_err(|e| BenchPlotError::Logging(e.to_string()))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| BenchPlotError::Logging(e.to_string()))
}
